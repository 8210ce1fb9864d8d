use std::io::{BufReader, Write};

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use clap_stdin::FileOrStdin;

use zigparse::config::{self, AppConfig, OutputFormat};
use zigparse::error::ApiResult;
use zigparse::message::{self, MessageKind, decode_message, parse_cluster, parse_hex};
use zigparse::render;

/*
 * Formatter function to output in syslog format. This makes sense when running
 * as a service (where output might go to a log file, or the system journal)
 */
#[allow(clippy::match_same_arms)]
fn syslog_format(
    buf: &mut pretty_env_logger::env_logger::fmt::Formatter,
    record: &log::Record,
) -> std::io::Result<()> {
    writeln!(
        buf,
        "<{}>{}: {}",
        match record.level() {
            log::Level::Error => 3,
            log::Level::Warn => 4,
            log::Level::Info => 6,
            log::Level::Debug => 7,
            log::Level::Trace => 7,
        },
        record.target(),
        record.args()
    )
}

fn init_logging(config: &AppConfig) -> ApiResult<()> {
    /* Use filters from the config file, when RUST_LOG is not specified */
    let log_filters = std::env::var("RUST_LOG").unwrap_or_else(|_| config.log_filters.join(","));

    /* Detect if we need syslog or human-readable formatting */
    if std::env::var("SYSTEMD_EXEC_PID").is_ok_and(|pid| pid == std::process::id().to_string()) {
        Ok(pretty_env_logger::env_logger::builder()
            .format(syslog_format)
            .parse_filters(&log_filters)
            .try_init()?)
    } else {
        Ok(pretty_env_logger::formatted_builder()
            .parse_filters(&log_filters)
            .try_init()?)
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode attribute records (set/report attribute value)
    Attr {
        /// cluster id, in hex
        #[arg(short, long, default_value = "0")]
        cluster: String,

        /// hex-encoded payloads
        #[arg(required = true)]
        data: Vec<String>,
    },

    /// Decode tuya datapoint frames
    Dp {
        /// hex-encoded payloads
        #[arg(required = true)]
        data: Vec<String>,
    },

    /// Decode raw zcl command envelopes
    Raw {
        /// hex-encoded payloads
        #[arg(required = true)]
        data: Vec<String>,
    },

    /// Decode message lines (`<kind> <cluster> <hex>`) from files or stdin
    Replay {
        /// input files
        #[arg(name = "files", default_value = "-")]
        files: Vec<FileOrStdin>,
    },
}

#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// configuration file
    #[arg(long, default_value = "zigparse.yaml")]
    config: Utf8PathBuf,

    /// output format (overrides configuration)
    #[arg(short, long)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Command,
}

struct Decoder {
    format: OutputFormat,
    follow_trailing: bool,
}

impl Decoder {
    fn decode(&self, kind: MessageKind, cluster_id: u16, data: &[u8]) -> ApiResult<()> {
        let decoded = decode_message(kind, cluster_id, data, self.follow_trailing)?;
        print!("{}", render::render(&decoded, self.format)?);
        Ok(())
    }

    fn decode_all(&self, kind: MessageKind, cluster_id: u16, inputs: &[String]) -> ApiResult<()> {
        for input in inputs {
            self.decode(kind, cluster_id, &parse_hex(input)?)?;
        }
        Ok(())
    }

    fn replay(&self, file: FileOrStdin) -> ApiResult<()> {
        let name = if file.is_stdin() {
            "<stdin>".to_string()
        } else {
            file.filename().to_string()
        };
        let reader = BufReader::new(file.into_reader()?);

        let res = message::replay(&name, reader, self.follow_trailing)?;
        for decoded in &res.decoded {
            print!("{}", render::render(decoded, self.format)?);
        }

        Ok(())
    }
}

fn run() -> ApiResult<()> {
    let args = Args::parse();

    let config = config::parse(&args.config)?;
    init_logging(&config)?;
    log::debug!("Configuration loaded successfully");

    let decoder = Decoder {
        format: args.format.unwrap_or(config.output),
        follow_trailing: config.follow_trailing,
    };

    match args.command {
        Command::Attr { cluster, data } => {
            decoder.decode_all(MessageKind::SetAttrValue, parse_cluster(&cluster)?, &data)?;
        }
        Command::Dp { data } => {
            decoder.decode_all(MessageKind::CustomCommand, zcl::cluster::CLUSTER_TUYA, &data)?;
        }
        Command::Raw { data } => decoder.decode_all(MessageKind::Raw, 0, &data)?,
        Command::Replay { files } => {
            for file in files {
                decoder.replay(file)?;
            }
        }
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        /* logging may not be initialized yet */
        if log::max_level() == log::LevelFilter::Off {
            eprintln!("Zigparse error: {err}");
        }
        log::error!("Zigparse error: {err}");
        log::error!("Fatal error encountered, cannot continue.");
        std::process::exit(1);
    }
}
