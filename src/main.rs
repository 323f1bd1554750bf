use std::{fs, path::PathBuf, sync::Arc};

use anyhow::{Context, anyhow, bail};
use clap::Parser;
use rayon::prelude::*;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};
use vi_tts_frontend::{EncoderInputs, Language, Lexicon, TtsConfig, VietnameseFrontend};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Text to phonemize (ignored when --input is given)
    text: Option<String>,

    /// File with one utterance per line
    #[arg(long)]
    input: Option<PathBuf>,

    /// tts_config.json shipped with the model; the built-in symbol table is used otherwise
    #[arg(long)]
    config: Option<PathBuf>,

    /// Language code of the input text
    #[arg(long, default_value = "VI")]
    language: Language,

    /// Skip number, date and symbol normalization
    #[arg(long)]
    raw: bool,

    /// Include the per-word analysis in the output
    #[arg(long)]
    report: bool,

    /// Write encoder inputs as .npy files, one subdirectory per utterance
    #[arg(long = "dump-npy")]
    dump_npy: Option<PathBuf>,

    /// Speaker name looked up in the config's spk2id
    #[arg(long, conflicts_with = "speaker_id")]
    speaker: Option<String>,

    /// Numeric speaker id for the sid input
    #[arg(long = "speaker-id", default_value_t = 0)]
    speaker_id: i64,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .context("failed to build log filter")?;

    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = args
        .config
        .as_ref()
        .map(TtsConfig::load_from_file)
        .transpose()?;

    let lexicon = match &config {
        Some(config) => {
            info!(sample_rate = config.sample_rate, "using symbol table from config");
            Lexicon::from_config(config, args.language).context("invalid TTS config")?
        }
        None => Lexicon::builtin(),
    };
    let frontend = VietnameseFrontend::new(Arc::new(lexicon));

    let speaker_id = match &args.speaker {
        Some(name) => *config
            .as_ref()
            .ok_or_else(|| anyhow!("--speaker needs --config to resolve names"))?
            .spk2id
            .get(name)
            .ok_or_else(|| anyhow!("speaker '{name}' not found in config"))?,
        None => args.speaker_id,
    };

    let utterances = read_utterances(&args)?;
    info!(count = utterances.len(), "phonemizing");

    let lines = utterances
        .par_iter()
        .enumerate()
        .map(|(idx, text)| {
            let mut report = frontend.report(text, !args.raw);
            if let Some(dir) = &args.dump_npy {
                let out_dir = dir.join(format!("{idx:04}"));
                EncoderInputs::from_sequence(&report.sequence, speaker_id)
                    .and_then(|inputs| inputs.write_npy(&out_dir))
                    .with_context(|| format!("failed to dump encoder inputs for line {idx}"))?;
            }
            if !args.report {
                report.segments.clear();
            }
            serde_json::to_string(&report).context("failed to serialize result")
        })
        .collect::<anyhow::Result<Vec<String>>>()?;

    for line in lines {
        println!("{line}");
    }
    Ok(())
}

fn read_utterances(args: &Args) -> anyhow::Result<Vec<String>> {
    if let Some(path) = &args.input {
        let buf = fs::read_to_string(path)
            .with_context(|| format!("failed to read input from {}", path.display()))?;
        return Ok(buf
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect());
    }
    match &args.text {
        Some(text) => Ok(vec![text.clone()]),
        None => bail!("provide text or --input <file>"),
    }
}
