use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{anyhow, bail, Context};
use gumdrop::Options;
use serde::Serialize;

use baseform::analysis::{AnalysisRegistry, AnalysisSettings};
use baseform::dictionary::{DictionaryConfig, LemmaDictionary};
use baseform::filter::BaseformFilterFactory;
use baseform::tokenizer::{TextTokenStream, Token, TokenStream};
use baseform::vfs::Fs;

trait OutputWriter {
    fn write_token(&mut self, surface: &Token, base: &Token);
    fn finish(&mut self);
}

struct StdoutWriter;

fn format_token(surface: &Token, base: &Token) -> String {
    format!("{:>4}: {} → {}", surface.start, surface.text, base.text)
}

impl OutputWriter for StdoutWriter {
    fn write_token(&mut self, surface: &Token, base: &Token) {
        println!("{}", format_token(surface, base));
    }

    fn finish(&mut self) {}
}

#[derive(Serialize)]
struct TokenResult {
    surface: String,
    base: String,
    start: usize,
    end: usize,
}

struct JsonWriter {
    results: Vec<TokenResult>,
}

impl JsonWriter {
    pub fn new() -> JsonWriter {
        JsonWriter { results: vec![] }
    }
}

impl OutputWriter for JsonWriter {
    fn write_token(&mut self, surface: &Token, base: &Token) {
        self.results.push(TokenResult {
            surface: surface.text.to_string(),
            base: base.text.to_string(),
            start: surface.start,
            end: surface.end,
        });
    }

    fn finish(&mut self) {
        match serde_json::to_string_pretty(&self.results) {
            Ok(v) => println!("{}", v),
            Err(e) => eprintln!("{:?}", e),
        }
    }
}

#[derive(Debug, Options)]
struct Args {
    #[options(help = "print help message")]
    help: bool,

    #[options(command)]
    command: Option<Command>,
}

#[derive(Debug, Options)]
enum Command {
    #[options(help = "print the base form of every word of the input")]
    Lemmatize(LemmatizeArgs),

    #[options(help = "print all base forms listed for the given words")]
    Lookup(LookupArgs),

    #[options(help = "print load statistics for a word list")]
    Stats(StatsArgs),
}

#[derive(Debug, Options)]
struct LemmatizeArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(help = "word list to be used")]
    dictionary: Option<PathBuf>,

    #[options(
        no_short,
        help = "field delimiter of the word list: a character, or 'tab' (default: any whitespace)"
    )]
    delimiter: Option<String>,

    #[options(help = "analysis settings (JSON) to resolve --filter from")]
    settings: Option<PathBuf>,

    #[options(help = "name of the filter in the settings", default = "baseform")]
    filter: String,

    #[options(no_short, long = "json", help = "output in JSON format")]
    use_json: bool,

    #[options(free, help = "text to be processed")]
    inputs: Vec<String>,
}

#[derive(Debug, Options)]
struct LookupArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(help = "word list to be used", required)]
    dictionary: PathBuf,

    #[options(
        no_short,
        help = "field delimiter of the word list: a character, or 'tab' (default: any whitespace)"
    )]
    delimiter: Option<String>,

    #[options(free, help = "words to be looked up")]
    inputs: Vec<String>,
}

#[derive(Debug, Options)]
struct StatsArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(help = "word list to be used", required)]
    dictionary: PathBuf,

    #[options(
        no_short,
        help = "field delimiter of the word list: a character, or 'tab' (default: any whitespace)"
    )]
    delimiter: Option<String>,
}

fn parse_delimiter(value: Option<&str>) -> anyhow::Result<DictionaryConfig> {
    let value = match value {
        None => return Ok(DictionaryConfig::default()),
        Some(v) => v,
    };

    let delimiter = match value {
        "tab" | "\\t" => '\t',
        "space" => ' ',
        _ => {
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => bail!("delimiter must be a single character, got {:?}", value),
            }
        }
    };

    Ok(DictionaryConfig::with_delimiter(delimiter))
}

fn load_dictionary(
    path: &Path,
    delimiter: Option<&str>,
) -> anyhow::Result<Arc<LemmaDictionary>> {
    let config = parse_delimiter(delimiter)?;
    let dictionary = LemmaDictionary::open(path, &config)
        .with_context(|| format!("loading {}", path.display()))?;
    Ok(Arc::new(dictionary))
}

fn read_input(inputs: Vec<String>) -> anyhow::Result<String> {
    if inputs.is_empty() {
        eprintln!("Reading from stdin...");
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("reading stdin")?;
        Ok(buffer)
    } else {
        Ok(inputs.join(" "))
    }
}

/// Surface forms to look up: each argument as given, or else one per
/// non-blank line of `stdin`. Forms may contain spaces.
fn lookup_keys<R: Read>(inputs: Vec<String>, mut stdin: R) -> anyhow::Result<Vec<String>> {
    if !inputs.is_empty() {
        return Ok(inputs);
    }

    eprintln!("Reading from stdin...");
    let mut buffer = String::new();
    stdin
        .read_to_string(&mut buffer)
        .context("reading stdin")?;

    Ok(buffer
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

fn lemmatize(args: LemmatizeArgs) -> anyhow::Result<()> {
    let factory = match (&args.settings, &args.dictionary) {
        (Some(settings), _) => {
            let settings = AnalysisSettings::from_path(settings)?;
            let registry = AnalysisRegistry::from_settings(&Fs, &settings)?;
            registry
                .token_filter(&args.filter)
                .cloned()
                .ok_or_else(|| anyhow!("no token filter named '{}' in settings", args.filter))?
        }
        (None, Some(path)) => {
            BaseformFilterFactory::new(load_dictionary(path, args.delimiter.as_deref())?)
        }
        (None, None) => bail!("either --dictionary or --settings is required"),
    };

    let mut writer: Box<dyn OutputWriter> = if args.use_json {
        Box::new(JsonWriter::new())
    } else {
        Box::new(StdoutWriter)
    };

    let text = read_input(args.inputs)?;
    let mut surfaces = TextTokenStream::new(&text);
    let mut filter = factory.create(TextTokenStream::new(&text));

    while let (Some(surface), Some(base)) = (surfaces.next_token(), filter.next_token()) {
        writer.write_token(&surface, &base);
    }

    writer.finish();

    Ok(())
}

fn lookup(args: LookupArgs) -> anyhow::Result<()> {
    let dictionary = load_dictionary(&args.dictionary, args.delimiter.as_deref())?;

    for word in lookup_keys(args.inputs, io::stdin())? {
        match dictionary.lookup(&word) {
            Some(candidates) => {
                let candidates: Vec<&str> = candidates.iter().map(|c| c.as_str()).collect();
                println!("{}\t{}", word, candidates.join(", "));
            }
            None => println!("{}\t(none)", word),
        }
    }

    Ok(())
}

fn stats(args: StatsArgs) -> anyhow::Result<()> {
    let dictionary = load_dictionary(&args.dictionary, args.delimiter.as_deref())?;
    let report = dictionary.report();

    println!("surface forms: {}", dictionary.len());
    println!("lines:         {}", report.lines);
    println!("pairs:         {}", report.pairs);
    println!("duplicates:    {}", report.duplicates);
    println!("malformed:     {}", report.malformed);

    Ok(())
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let args = Args::parse_args_default_or_exit();

    match args.command {
        None => Ok(()),
        Some(Command::Lemmatize(args)) => lemmatize(args),
        Some(Command::Lookup(args)) => lookup(args),
        Some(Command::Stats(args)) => stats(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimiter_names() {
        assert_eq!(parse_delimiter(None).unwrap().delimiter, None);
        assert_eq!(parse_delimiter(Some("tab")).unwrap().delimiter, Some('\t'));
        assert_eq!(parse_delimiter(Some("\\t")).unwrap().delimiter, Some('\t'));
        assert_eq!(parse_delimiter(Some(";")).unwrap().delimiter, Some(';'));
        assert!(parse_delimiter(Some(";;")).is_err());
    }

    #[test]
    fn lookup_arguments_are_not_split() {
        let keys = lookup_keys(vec!["New Yorker".into(), "Autos".into()], io::empty()).unwrap();
        assert_eq!(keys, vec!["New Yorker", "Autos"]);
    }

    #[test]
    fn lookup_reads_one_form_per_line() {
        let stdin: &[u8] = b"New Yorker\r\n\n  Autos \n";
        let keys = lookup_keys(vec![], stdin).unwrap();
        assert_eq!(keys, vec!["New Yorker", "Autos"]);
    }

    #[test]
    fn token_line_shows_surface_and_base() {
        let surface = Token::new("Autos", 9, 14);
        let base = surface.clone().with_text("Auto");
        assert_eq!(format_token(&surface, &base), "   9: Autos → Auto");
    }
}
