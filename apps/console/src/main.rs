//! Terminal composition root: wires the bootstrap and lobby controllers
//! to an HTTP transport and plain-text renditions of the page seams.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex,
    },
};

use anyhow::Result;
use clap::{Parser, Subcommand};
use client_core::{
    game_id_from_path, Board, BoardFactory, BootstrapOutcome, DragTransfer,
    GameBootstrapController, GameDirectory, GamePage, HttpGameDirectory, LobbyController,
    LobbyPage, Navigator, Notifier, Piece, PieceInteraction, RoomEntry, SOURCE_POSITION_KEY,
};
use shared::{
    domain::Side,
    protocol::PiecePlacement,
};
use tracing::info;

mod config;

use config::load_settings;

#[derive(Parser, Debug)]
struct Args {
    /// Overrides the configured server URL.
    #[arg(long)]
    server_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Bootstrap the game page served at the given path (e.g. /games/42)
    /// and optionally replay one drop gesture.
    Game {
        #[arg(long)]
        path: String,
        /// Source coordinate of a drop gesture to replay after bootstrap.
        #[arg(long)]
        drop_from: Option<String>,
    },
    /// Create a room and enter it.
    Lobby,
}

struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn back(&self) {
        println!("(returning to the previous page)");
    }

    fn replace(&self, location: &str) {
        println!("(navigating to {location}, replacing the history entry)");
    }
}

struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notice(&self, message: &str) {
        println!("! {message}");
    }
}

#[derive(Default)]
struct TerminalGamePage {
    drop_target: Mutex<Option<Arc<PieceInteraction>>>,
}

impl GamePage for TerminalGamePage {
    fn set_name_tag(&self, side: Side, text: &str) {
        println!("[{side}] name: {text}");
    }

    fn set_record_tag(&self, side: Side, text: &str) {
        println!("[{side}] record: {text}");
    }

    fn install_drop_target(&self, interaction: Arc<PieceInteraction>) {
        *self.drop_target.lock().expect("drop target lock") = Some(interaction);
    }
}

struct TerminalLobbyPage;

impl LobbyPage for TerminalLobbyPage {
    fn append_room_entry(&self, entry: &RoomEntry) {
        println!("room list + [{}]", entry.label());
    }
}

struct ConsolePiece {
    placement: PiecePlacement,
    highlighted: AtomicBool,
}

impl Piece for ConsolePiece {
    fn unhighlight(&self) {
        if self.highlighted.swap(false, Ordering::SeqCst) {
            println!(
                "{} at {} unhighlighted",
                self.placement.piece, self.placement.position
            );
        }
    }
}

struct ConsoleBoard {
    pieces: HashMap<String, Arc<ConsolePiece>>,
}

impl Board for ConsoleBoard {
    fn find_piece_by_source_position(&self, source: &str) -> Option<Arc<dyn Piece>> {
        self.pieces
            .get(source)
            .map(|piece| Arc::clone(piece) as Arc<dyn Piece>)
    }
}

struct ConsoleBoardFactory;

impl BoardFactory for ConsoleBoardFactory {
    fn create(&self, pieces: &[PiecePlacement], turn: Side) -> Arc<dyn Board> {
        println!("board: {} pieces, {turn} to move", pieces.len());
        let pieces = pieces
            .iter()
            .map(|placement| {
                (
                    placement.position.clone(),
                    Arc::new(ConsolePiece {
                        placement: placement.clone(),
                        highlighted: AtomicBool::new(true),
                    }),
                )
            })
            .collect();
        Arc::new(ConsoleBoard { pieces })
    }
}

/// Single-datum stand-in for the browser drag channel.
struct ReplayTransfer {
    source: String,
}

impl DragTransfer for ReplayTransfer {
    fn data(&self, key: &str) -> Option<String> {
        (key == SOURCE_POSITION_KEY).then(|| self.source.clone())
    }
}

async fn run_game(
    directory: Arc<dyn GameDirectory>,
    path: &str,
    drop_from: Option<String>,
) -> Result<()> {
    let Some(game_id) = game_id_from_path(path) else {
        anyhow::bail!("page path '{path}' has no usable game identifier");
    };
    info!("bootstrapping game {game_id}");

    let page = Arc::new(TerminalGamePage::default());
    let controller = GameBootstrapController::new(
        game_id,
        directory,
        Arc::new(ConsoleBoardFactory),
        Arc::clone(&page) as Arc<dyn GamePage>,
        Arc::new(TerminalNavigator),
        Arc::new(TerminalNotifier),
    );

    match controller.bootstrap().await {
        BootstrapOutcome::Ready(_) => {
            println!("game ready");
            if let Some(source) = drop_from {
                // Replay the gesture through the handler the page installed.
                let target = page.drop_target.lock().expect("drop target lock").clone();
                if let Some(interaction) = target {
                    interaction.handle_drop(&ReplayTransfer { source });
                }
            }
        }
        BootstrapOutcome::SessionUnavailable | BootstrapOutcome::AlreadyFinished => {}
    }
    Ok(())
}

async fn run_lobby(directory: Arc<dyn GameDirectory>) -> Result<()> {
    let controller = LobbyController::new(
        directory,
        Arc::new(TerminalLobbyPage),
        Arc::new(TerminalNavigator),
    );
    let room_id = controller.create_room().await?;
    controller.enter(room_id.as_str());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(url) = args.server_url {
        settings.server_url = config::normalize_server_url(&url);
    }

    let directory: Arc<dyn GameDirectory> = Arc::new(HttpGameDirectory::new(settings.server_url));

    match args.command {
        Command::Game { path, drop_from } => run_game(directory, &path, drop_from).await,
        Command::Lobby => run_lobby(directory).await,
    }
}
