use ratatui::style::Color;

pub struct Theme {
    #[allow(dead_code)] // Background color field for future use
    pub bg: Color,
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub highlight_bg: Color, // Background for highlighted elements
    pub border_focused: Color,
    pub border_normal: Color,
    pub node_red: Color,   // Red-Black tree red nodes
    pub node_black: Color, // Red-Black tree black nodes
    pub visited: Color,    // Settled Dijkstra nodes
    pub scratch: Color,    // Swap temp register
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    highlight_bg: Color::Rgb(69, 71, 90),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    node_red: Color::Rgb(243, 139, 168),
    node_black: Color::Rgb(147, 153, 178),
    visited: Color::Rgb(166, 227, 161),
    scratch: Color::Rgb(245, 194, 231), // Pink for the temp register
};
