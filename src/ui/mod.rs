pub mod glyphs;
pub mod slot_scene;

use ratatui::Frame;

use crate::session::Session;

/// Main UI drawing function
pub fn draw_ui(frame: &mut Frame, session: &Session) {
    let size = frame.size();
    slot_scene::render_slot_scene(frame, size, session.state(), session.last_save_error());
}
