//! Pointer input handling

/// Translate a pointer's window x into canvas-relative x
pub fn canvas_relative_x(client_x: f64, canvas_left: f64) -> f32 {
    (client_x - canvas_left) as f32
}
