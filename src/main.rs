use anyhow::Result;

fn main() -> Result<()> {
    env_logger::init();
    let args = ubs_reformat_csv::args::parse();
    ubs_reformat_csv::cli::main(args)
}
