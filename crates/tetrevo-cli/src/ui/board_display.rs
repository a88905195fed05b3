use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, BlockExt as _, Widget},
};
use tetrevo_engine::{BOARD_COLS, BOARD_ROWS, Board};

/// Renders a board with the floor at the bottom, two terminal columns per
/// board cell.
#[derive(Debug)]
pub(crate) struct BoardDisplay<'a> {
    board: &'a Board,
    block: Option<Block<'a>>,
}

impl<'a> BoardDisplay<'a> {
    pub(crate) fn new(board: &'a Board) -> Self {
        Self { board, block: None }
    }

    pub(crate) fn block(self, block: Block<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub(crate) fn height() -> u16 {
        // one terminal row per board row plus the border
        u16::try_from(BOARD_ROWS).unwrap() + 2
    }
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let inner = self.block.inner_if_some(area);

        for (i, y) in (0..BOARD_ROWS).rev().enumerate() {
            let screen_y = inner.y + u16::try_from(i).unwrap();
            if screen_y >= inner.bottom() {
                break;
            }
            let mut line = String::with_capacity(BOARD_COLS * 2);
            for x in 0..BOARD_COLS {
                line.push_str(if self.board.is_occupied(x, y) {
                    "██"
                } else {
                    " ·"
                });
            }
            buf.set_string(inner.x, screen_y, &line, Style::default());
        }
    }
}
