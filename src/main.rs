//! # FaqDesk: FAQ assistant with human handoff
//!
//! Usage:
//!   faqdesk serve                        # HTTP gateway (default port 3000, or $PORT)
//!   faqdesk serve --port 8080            # Custom port
//!   faqdesk train twcs.csv               # Extract Q/A pairs into data/trained_pairs.json
//!   faqdesk chat                         # Chat in the terminal
//!   faqdesk faqs                         # List knowledge-base questions
//!   faqdesk init                         # Write a default ~/.faqdesk/config.toml

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use faqdesk_agent::Agent;
use faqdesk_core::config::FaqDeskConfig;
use faqdesk_core::types::ChatRequest;
use faqdesk_knowledge::KnowledgeBase;

#[derive(Parser)]
#[command(
    name = "faqdesk",
    version,
    about = "💬 FaqDesk: FAQ assistant with human handoff"
)]
struct Cli {
    /// Config file (default: $FAQDESK_CONFIG or ~/.faqdesk/config.toml)
    #[arg(long, global = true)]
    config: Option<String>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP gateway
    Serve {
        /// Bind address
        #[arg(long)]
        host: Option<String>,
        /// Listen port
        #[arg(short, long)]
        port: Option<u16>,
        /// Directory holding faqs.json and trained_pairs.json
        #[arg(long)]
        data_dir: Option<String>,
        /// Directory for static client files
        #[arg(long)]
        public_dir: Option<String>,
    },
    /// Extract question/answer pairs from a support-conversation CSV
    Train {
        /// Input CSV
        csv: String,
        /// Output file (default: <data-dir>/trained_pairs.json)
        #[arg(short, long)]
        out: Option<String>,
        #[arg(long)]
        data_dir: Option<String>,
    },
    /// Chat with the knowledge base in the terminal
    Chat {
        #[arg(long)]
        data_dir: Option<String>,
    },
    /// Print every knowledge-base question
    Faqs {
        #[arg(long)]
        data_dir: Option<String>,
    },
    /// Write a default config file (to --config, or the default path)
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn expand_path(p: &str) -> String {
    shellexpand::tilde(p).to_string()
}

fn load_config(path: Option<&str>) -> Result<FaqDeskConfig> {
    let config = match path {
        Some(p) => {
            let mut config = FaqDeskConfig::load_from(&PathBuf::from(expand_path(p)))?;
            config.apply_env();
            config
        }
        None => FaqDeskConfig::load()?,
    };
    tracing::debug!(
        "⚙️ Config: port={}, data_dir={}, threshold={}",
        config.gateway.port,
        config.knowledge.data_dir,
        config.dialogue.confidence_threshold
    );
    Ok(config)
}

fn apply_data_dir(config: &mut FaqDeskConfig, data_dir: Option<String>) {
    if let Some(dir) = data_dir {
        config.knowledge.data_dir = expand_path(&dir);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "faqdesk=debug,faqdesk_gateway=debug,faqdesk_agent=debug,faqdesk_knowledge=debug,tower_http=debug"
    } else {
        "faqdesk=info,faqdesk_gateway=info,faqdesk_knowledge=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_target(false)
        .init();

    if let Command::Init { force } = cli.command {
        let path = cli
            .config
            .as_deref()
            .map(|p| PathBuf::from(expand_path(p)))
            .or_else(|| std::env::var("FAQDESK_CONFIG").ok().map(PathBuf::from))
            .unwrap_or_else(FaqDeskConfig::default_path);
        if FaqDeskConfig::init_at(&path, force)? {
            println!("✅ Wrote default config to {}", path.display());
        } else {
            println!("⚠️  {} already exists (use --force to overwrite)", path.display());
        }
        return Ok(());
    }

    let mut config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Serve {
            host,
            port,
            data_dir,
            public_dir,
        } => {
            if let Some(host) = host {
                config.gateway.host = host;
            }
            if let Some(port) = port {
                config.gateway.port = port;
            }
            if let Some(dir) = public_dir {
                config.gateway.public_dir = expand_path(&dir);
            }
            apply_data_dir(&mut config, data_dir);

            println!("💬 FaqDesk v{}", env!("CARGO_PKG_VERSION"));
            println!("   🌐 Chat:      http://{}:{}", config.gateway.host, config.gateway.port);
            println!("   📂 Data Dir:  {}", config.knowledge.data_dir);
            println!("   🗂️  Public:    {}", config.gateway.public_dir);
            println!();

            faqdesk_gateway::start(&config).await?;
        }
        Command::Train { csv, out, data_dir } => {
            apply_data_dir(&mut config, data_dir);
            let out = out
                .map(|p| PathBuf::from(expand_path(&p)))
                .unwrap_or_else(|| config.knowledge.pairs_path());

            let pairs = faqdesk_knowledge::extract::extract_file(&PathBuf::from(expand_path(&csv)))?;
            pairs.write(&out)?;
            println!("✅ Wrote {} pairs to {}", pairs.count, out.display());
        }
        Command::Chat { data_dir } => {
            apply_data_dir(&mut config, data_dir);
            run_chat(&config)?;
        }
        Command::Faqs { data_dir } => {
            apply_data_dir(&mut config, data_dir);
            let kb = KnowledgeBase::load(&config.knowledge);
            for faq in kb.list() {
                println!("{}", faq.question);
            }
        }
        Command::Init { .. } => {}
    }

    Ok(())
}

/// Interactive terminal chat on a single conversation.
fn run_chat(config: &FaqDeskConfig) -> Result<()> {
    let agent = Agent::from_config(config);
    println!(
        "💬 FaqDesk chat ({} entries). Ask a question, or type /quit.",
        agent.knowledge().len()
    );

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let mut conversation_id: Option<String> = None;

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let message = line.trim();
        if message.is_empty() {
            continue;
        }
        if message == "/quit" || message == "/exit" {
            break;
        }

        let resp = agent.chat(ChatRequest::new(message, conversation_id.clone()));
        conversation_id = Some(resp.conversation_id);

        println!("🤖 {}", resp.reply);
        if resp.handoff {
            println!("🙋 {}", config.dialogue.handoff_notice);
        }
        if !resp.suggestions.is_empty() {
            println!("   Related:");
            for s in &resp.suggestions {
                println!("   • {s}");
            }
        }
    }

    println!("👋 Bye");
    Ok(())
}
