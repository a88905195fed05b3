use std::time::Duration;

use crossterm::event::{self, Event, KeyCode};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::Text,
    widgets::Block,
};
use rand::Rng as _;
use tetrevo_engine::{Game, Seed};
use tetrevo_evaluator::{Weights, best_move};

use crate::ui::BoardDisplay;

/// Weight vector taken from a strong training run.
const PLAY_WEIGHTS: Weights = Weights::new([0.7606, -0.3566, -0.1845, -0.5107]);

/// Pause between committed pieces, also the event-poll interval.
const STEP_DELAY: Duration = Duration::from_millis(80);

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct WatchArg {
    /// Seed for the piece sequence; drawn from OS entropy when omitted
    #[arg(long)]
    seed: Option<Seed>,
}

pub(crate) fn run(arg: &WatchArg) -> anyhow::Result<()> {
    let seed = arg.seed.unwrap_or_else(|| rand::rng().random());
    let mut game = Game::new(seed);

    let mut terminal = ratatui::init();
    let result = watch_loop(&mut terminal, &mut game);
    ratatui::restore();
    result
}

fn watch_loop(terminal: &mut DefaultTerminal, game: &mut Game) -> anyhow::Result<()> {
    let mut game_over = false;
    loop {
        terminal.draw(|frame| draw(frame, game, game_over))?;

        if event::poll(STEP_DELAY)? {
            if let Event::Key(key) = event::read()?
                && key.code == KeyCode::Char('q')
            {
                return Ok(());
            }
            continue;
        }

        if game_over {
            continue;
        }
        match best_move(game, &PLAY_WEIGHTS) {
            Some(mv) => game_over = game.commit(mv).is_err(),
            None => game_over = true,
        }
    }
}

fn draw(frame: &mut Frame<'_>, game: &Game, game_over: bool) {
    let [board_area, status_area, help_area] = Layout::vertical([
        Constraint::Length(BoardDisplay::height()),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let board = BoardDisplay::new(game.board()).block(Block::bordered().title("tetrevo"));
    frame.render_widget(board, board_area);

    let status = format!(
        "pieces {}  rows {}",
        game.pieces_placed(),
        game.rows_cleared(),
    );
    frame.render_widget(Text::from(status), status_area);

    let help = if game_over {
        "game over | q (Quit)"
    } else {
        "q (Quit)"
    };
    let help = Text::from(help)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, help_area);
}
