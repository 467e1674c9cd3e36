use env_logger::Env;
use late_fees::{data_file_path, fees_report_file};
use std::{env, error::Error, fs, path::PathBuf};

const DEFAULT_INPUT: &str = "book_returns_short.csv";
const DEFAULT_OUTPUT: &str = "book_fees.csv";

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let (infile, outfile) = get_file_paths_from_args()?;
    fees_report_file(&infile, &outfile)?;

    print!("{}", fs::read_to_string(&outfile)?);

    Ok(())
}

fn get_file_paths_from_args() -> Result<(PathBuf, PathBuf), Box<dyn Error>> {
    const CSV_EXTENSION: &str = ".csv";

    let args: Vec<String> = env::args().collect();
    if args.len() > 3 {
        eprintln!("Usage: {} [<book_returns.csv> [<output.csv>]]", args[0]);
        std::process::exit(1);
    }

    let infile = match args.get(1) {
        Some(path) => {
            if !path.ends_with(CSV_EXTENSION) {
                eprintln!("Error: The file must have a .csv extension");
                std::process::exit(1);
            }
            PathBuf::from(path)
        }
        None => data_file_path(DEFAULT_INPUT),
    };
    let outfile = PathBuf::from(args.get(2).map(String::as_str).unwrap_or(DEFAULT_OUTPUT));

    Ok((infile, outfile))
}
