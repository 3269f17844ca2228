use clap::{Parser, ValueEnum};
use tictactoe::{
    init_logging, local_ip, run_offline, HumanPlayer, OnlineSession, RandomAi, TermUi, Ui,
    DEFAULT_PORT,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Debug)]
enum Symbol {
    X,
    O,
}

#[derive(Parser)]
enum Commands {
    /// Two players alternating on this terminal.
    Local,
    /// Play against a random-move AI.
    Ai {
        #[arg(long, value_enum, default_value_t = Symbol::X, help = "Symbol you play; X always moves first")]
        symbol: Symbol,
        #[arg(long, help = "Fix RNG seed for a reproducible AI (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Host an online game and wait for an opponent to connect.
    Host {
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },
    /// Join an online game hosted by a peer.
    Join {
        #[arg(long, help = "Host address; prompted for if omitted")]
        connect: Option<String>,
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let mut ui = TermUi::new();

    match cli.command {
        Commands::Local => {
            let mut x = HumanPlayer::new();
            let mut o = HumanPlayer::new();
            run_offline(&mut x, &mut o, &mut ui)?;
        }
        Commands::Ai { symbol, seed } => {
            let mut ai = match seed {
                Some(seed) => RandomAi::seeded(seed),
                None => RandomAi::new(),
            };
            let mut human = HumanPlayer::new();
            match symbol {
                Symbol::X => run_offline(&mut human, &mut ai, &mut ui)?,
                Symbol::O => run_offline(&mut ai, &mut human, &mut ui)?,
            }
        }
        Commands::Host { port } => {
            println!("Hosting on {}:{}. Waiting for an opponent...", local_ip(), port);
            let session = OnlineSession::host(port).await?;
            session.run(&mut ui).await?;
        }
        Commands::Join { connect, port } => {
            let host = match connect {
                Some(host) => host,
                None => ui.prompt_host_address()?,
            };
            println!("Connecting to {}:{}...", host, port);
            let session = OnlineSession::join(&host, port).await?;
            session.run(&mut ui).await?;
        }
    }
    Ok(())
}
