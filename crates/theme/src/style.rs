/// Characters used to draw the gauge outline and fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub fill:         char,
    pub empty:        char,
    pub cap:          char,
    pub horizontal:   char,
    pub vertical:     char,
    pub top_left:     char,
    pub top_right:    char,
    pub bottom_left:  char,
    pub bottom_right: char,
}

impl Default for Glyphs {
    /// Solid block fill inside a rounded box.
    fn default() -> Self {
        Self {
            fill:         '█',
            empty:        ' ',
            cap:          '_',
            horizontal:   '─',
            vertical:     '│',
            top_left:     '╭',
            top_right:    '╮',
            bottom_left:  '╰',
            bottom_right: '╯',
        }
    }
}
