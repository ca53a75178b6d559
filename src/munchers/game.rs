use super::grid::Grid;
use super::input::{self, Command};
use super::player::{Direction, PlayerState};
use super::words::{Category, Word};
use crate::config::{GameConfig, Result};
use crate::{Context, Game};
use crossterm::event::Event;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use ratatui::layout::Rect;
use std::time::Duration;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Playing,
    Won,
    Lost,
}

impl Status {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Status::Playing)
    }
}

/// What a single eat did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EatOutcome {
    /// The round is over, nothing happened
    Rejected,
    /// Nothing under the player
    Empty,
    Correct(Word),
    Mistake(Word),
}

/// One game from start to win/loss. Replaced wholesale on restart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    grid: Grid,
    player: PlayerState,
    status: Status,
}

impl Round {
    pub fn new(config: &GameConfig, rng: &mut SmallRng) -> Result<Self> {
        let grid = Grid::initialize(config.grid_size, &config.ratio, rng)?;
        Ok(Self::from_grid(grid))
    }

    /// Start a round on a prepared grid with a fresh player
    pub fn from_grid(grid: Grid) -> Self {
        let mut round = Self {
            grid,
            player: PlayerState::default(),
            status: Status::Playing,
        };
        round.settle();
        round
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Move the player. Ignored once the round is over.
    pub fn step(&mut self, direction: Direction) -> bool {
        if self.status.is_terminal() {
            debug!(?direction, status = ?self.status, "move ignored");
            return false;
        }
        self.player.step(direction, self.grid.size())
    }

    /// Eat whatever sits under the player.
    ///
    /// A sensitive word counts toward the win; an ordinary word costs a life. Either way the
    /// cell is cleared.
    pub fn eat(&mut self) -> EatOutcome {
        if self.status.is_terminal() {
            debug!(status = ?self.status, "eat ignored");
            return EatOutcome::Rejected;
        }
        let (row, col) = self.player.position();
        let outcome = match self.grid.clear(row, col) {
            None => EatOutcome::Empty,
            Some(word) => match word.category {
                Category::Sensitive => EatOutcome::Correct(word),
                Category::Ordinary => {
                    self.player.lose_life();
                    EatOutcome::Mistake(word)
                }
            },
        };
        debug!(?outcome, row, col, "eat resolved");
        self.settle();
        outcome
    }

    fn settle(&mut self) {
        if self.status.is_terminal() {
            return;
        }
        if self.grid.remaining_sensitive() == 0 {
            self.status = Status::Won;
            info!(total = self.grid.total_sensitive(), "all sensitive words eaten");
        } else if self.player.is_out_of_lives() {
            self.status = Status::Lost;
            info!(remaining = self.grid.remaining_sensitive(), "out of lives");
        }
    }
}

/// Everything the renderer reads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MunchersState {
    pub round: Round,
    pub help_open: bool,
}

pub struct MunchersGame {
    state: MunchersState,
    config: GameConfig,
    rng: SmallRng,
}

impl MunchersGame {
    pub fn new(config: GameConfig) -> Result<Self> {
        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        let round = Round::new(&config, &mut rng)?;
        info!(
            grid_size = config.grid_size,
            sensitive = round.grid().total_sensitive(),
            "round started"
        );
        Ok(Self {
            state: MunchersState {
                round,
                help_open: false,
            },
            config,
            rng,
        })
    }

    pub fn round(&self) -> &Round {
        &self.state.round
    }

    pub fn help_open(&self) -> bool {
        self.state.help_open
    }

    /// Throw the current round away and deal a new one
    pub fn restart(&mut self) -> Result<()> {
        let round = Round::new(&self.config, &mut self.rng)?;
        info!(sensitive = round.grid().total_sensitive(), "round restarted");
        self.state = MunchersState {
            round,
            help_open: false,
        };
        Ok(())
    }
}

impl Game for MunchersGame {
    type Command = Command;
    type State = MunchersState;

    fn tick_rate(&self) -> Duration {
        self.config.tick_rate
    }

    fn map_event(&self, event: &Event, area: Rect) -> Option<Command> {
        input::map_event(event, area, self.config.grid_size, self.state.help_open)
    }

    fn apply(&mut self, command: Command, ctx: &mut Context) {
        match command {
            Command::Quit => {
                info!("quit requested");
                ctx.quit();
            }
            Command::Restart => {
                // config was validated when the first round was dealt
                if let Err(e) = self.restart() {
                    tracing::error!(%e, "restart failed");
                }
            }
            Command::ToggleHelp => self.state.help_open = !self.state.help_open,
            Command::CloseHelp => self.state.help_open = false,
            Command::Move(_) | Command::Eat if self.state.help_open => {
                debug!(?command, "suppressed while help is open");
            }
            Command::Move(direction) => {
                self.state.round.step(direction);
            }
            Command::Eat => {
                self.state.round.eat();
            }
        }
    }

    fn state(&self) -> &MunchersState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SensitiveRatio;
    use crate::munchers::player::MAX_LIVES;

    const S: Option<Word> = Some(Word::sensitive("SSN"));
    const O: Option<Word> = Some(Word::ordinary("Apple"));

    fn round(size: usize, cells: Vec<Option<Word>>) -> Round {
        Round::from_grid(Grid::from_cells(size, cells).unwrap())
    }

    fn seeded(seed: u64) -> MunchersGame {
        MunchersGame::new(GameConfig::default().with_seed(Some(seed))).unwrap()
    }

    #[test]
    fn eating_sensitive_only_moves_progress() {
        let mut round = round(2, vec![S, S, O, None]);
        assert_eq!(round.eat(), EatOutcome::Correct(Word::sensitive("SSN")));
        assert_eq!(round.grid().remaining_sensitive(), 1);
        assert_eq!(round.player().lives, MAX_LIVES);
        assert_eq!(round.grid().word_at(0, 0), None);
        assert_eq!(round.status(), Status::Playing);
    }

    #[test]
    fn eating_ordinary_only_costs_a_life() {
        let mut round = round(2, vec![O, S, None, None]);
        assert_eq!(round.eat(), EatOutcome::Mistake(Word::ordinary("Apple")));
        assert_eq!(round.player().lives, MAX_LIVES - 1);
        assert_eq!(round.grid().remaining_sensitive(), 1);
        assert_eq!(round.grid().word_at(0, 0), None);
    }

    #[test]
    fn eating_empty_changes_nothing() {
        let mut round = round(2, vec![None, S, O, O]);
        let before = round.clone();
        assert_eq!(round.eat(), EatOutcome::Empty);
        assert_eq!(round, before);
    }

    #[test]
    fn last_life_loses_the_round() {
        let mut round = round(2, vec![O, O, O, S]);
        round.eat();
        round.step(Direction::Right);
        round.eat();
        assert_eq!(round.player().lives, 1);
        round.step(Direction::Down);
        round.step(Direction::Left);
        assert_eq!(round.eat(), EatOutcome::Mistake(Word::ordinary("Apple")));
        assert_eq!(round.player().lives, 0);
        assert_eq!(round.status(), Status::Lost);
        assert_eq!(round.grid().word_at(1, 0), None);

        // terminal until restart
        assert!(!round.step(Direction::Right));
        assert_eq!(round.eat(), EatOutcome::Rejected);
        assert_eq!(round.status(), Status::Lost);
    }

    #[test]
    fn last_sensitive_word_wins() {
        let mut round = round(2, vec![O, S, O, O]);
        round.step(Direction::Right);
        assert_eq!(round.eat(), EatOutcome::Correct(Word::sensitive("SSN")));
        assert_eq!(round.grid().remaining_sensitive(), 0);
        assert_eq!(round.status(), Status::Won);
    }

    #[test]
    fn moves_are_ignored_once_won() {
        let mut round = round(2, vec![S, O, O, O]);
        round.eat();
        assert_eq!(round.status(), Status::Won);
        assert!(!round.step(Direction::Down));
        assert_eq!(round.player().position(), (0, 0));
        assert_eq!(round.status(), Status::Won);
    }

    #[test]
    fn grid_without_sensitive_words_is_won_immediately() {
        let round = round(1, vec![O]);
        assert_eq!(round.status(), Status::Won);

        let config = GameConfig::new(5, SensitiveRatio::exactly(0.0).unwrap())
            .unwrap()
            .with_seed(Some(1));
        let game = MunchersGame::new(config).unwrap();
        assert_eq!(game.round().status(), Status::Won);
    }

    #[test]
    fn restart_deals_a_fresh_round() {
        let mut game = seeded(21);
        let mut ctx = Context::default();
        game.apply(Command::Move(Direction::Down), &mut ctx);
        game.apply(Command::Move(Direction::Right), &mut ctx);
        for _ in 0..3 {
            game.apply(Command::Eat, &mut ctx);
        }
        assert_eq!(game.round().player().position(), (1, 1));

        game.apply(Command::ToggleHelp, &mut ctx);
        game.apply(Command::Restart, &mut ctx);

        let round = game.round();
        assert_eq!(round.status(), Status::Playing);
        assert_eq!(round.player().position(), (0, 0));
        assert_eq!(round.player().lives, MAX_LIVES);
        assert_eq!(round.grid().total_sensitive(), round.grid().remaining_sensitive());
        assert!(!game.help_open());
        assert!(!ctx.should_quit());
    }

    #[test]
    fn restart_works_from_terminal_states() {
        let mut game = seeded(4);
        let mut ctx = Context::default();
        // walk the whole board eating everything until the round ends
        'outer: for row in 0..5 {
            for _ in 0..5 {
                game.apply(Command::Eat, &mut ctx);
                if game.round().status().is_terminal() {
                    break 'outer;
                }
                let dir = if row % 2 == 0 { Direction::Right } else { Direction::Left };
                game.apply(Command::Move(dir), &mut ctx);
            }
            game.apply(Command::Move(Direction::Down), &mut ctx);
        }
        assert!(game.round().status().is_terminal());

        game.apply(Command::Restart, &mut ctx);
        assert_eq!(game.round().status(), Status::Playing);
        assert_eq!(game.round().player().lives, MAX_LIVES);
    }

    #[test]
    fn help_overlay_suppresses_moves_and_eats() {
        let mut game = seeded(8);
        let mut ctx = Context::default();
        game.apply(Command::ToggleHelp, &mut ctx);
        assert!(game.help_open());

        let before = game.round().clone();
        game.apply(Command::Move(Direction::Down), &mut ctx);
        game.apply(Command::Eat, &mut ctx);
        assert_eq!(game.round(), &before);

        game.apply(Command::CloseHelp, &mut ctx);
        assert!(!game.help_open());
        game.apply(Command::Move(Direction::Down), &mut ctx);
        assert_eq!(game.round().player().position(), (1, 0));

        game.apply(Command::ToggleHelp, &mut ctx);
        game.apply(Command::ToggleHelp, &mut ctx);
        assert!(!game.help_open());
    }

    #[test]
    fn quit_works_with_help_open() {
        let mut game = seeded(2);
        let mut ctx = Context::default();
        game.apply(Command::ToggleHelp, &mut ctx);
        game.apply(Command::Quit, &mut ctx);
        assert!(ctx.should_quit());
    }

    #[test]
    fn seeded_games_are_reproducible() {
        assert_eq!(seeded(99).round(), seeded(99).round());
    }
}
