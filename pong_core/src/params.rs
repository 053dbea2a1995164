/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Device class
    pub const MOBILE_BREAKPOINT: f32 = 768.0; // max viewport width treated as mobile

    // Arena (fractions of the viewport)
    pub const DESKTOP_WIDTH_FRACTION: f32 = 0.6;
    pub const DESKTOP_HEIGHT_FRACTION: f32 = 0.9;
    pub const MOBILE_WIDTH_FRACTION: f32 = 0.98;
    pub const MOBILE_HEIGHT_FRACTION: f32 = 0.98;
    pub const DESKTOP_CENTER_RADIUS: f32 = 75.0;
    pub const MOBILE_CENTER_RADIUS: f32 = 50.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 50.0;
    pub const PADDLE_HEIGHT: f32 = 6.0;
    pub const PADDLE_OFFSET: f32 = 10.0; // distance from the arena edge
    pub const TRAJECTORY_FACTOR: f32 = 0.3; // lateral speed per pixel off-centre

    // Ball
    pub const BALL_RADIUS: f32 = 5.0;
    pub const DESKTOP_BALL_SPEED: f32 = -1.0;
    pub const MOBILE_BALL_SPEED: f32 = -2.0;
    pub const SERVE_SPEED_Y: f32 = -3.0; // heads toward the player
    pub const MAX_SPEED_Y: f32 = 5.0;
    pub const SPEED_Y_STEP: f32 = 1.0; // added on every hit once the player has moved

    // Opponent
    pub const DESKTOP_OPPONENT_SPEED: f32 = 3.0;
    pub const MOBILE_OPPONENT_SPEED: f32 = 4.0;
    pub const ESCALATED_OPPONENT_SPEED: f32 = 6.0;

    // Score
    pub const WIN_SCORE: u8 = 3;

    // Names
    pub const PLAYER_NAME: &'static str = "Player 1";
    pub const COMPUTER_NAME: &'static str = "Computer";
}
