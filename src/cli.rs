use anyhow::Result;

use crate::args::Args;
use crate::paths;
use crate::terminal::{self, BulletPointPrinter};

pub fn main(args: Args) -> Result<()> {
    let output_path = paths::output_path(&args.input);
    let summary = crate::convert_file(&args.input, &output_path)?;

    let printer = BulletPointPrinter::new_stdout();
    terminal::print_summary(&printer, &summary);
    terminal::print_wrote(&printer, &output_path);
    Ok(())
}
