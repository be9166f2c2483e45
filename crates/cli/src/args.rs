use clap::{Parser, Subcommand};

#[derive(clap::Args, Debug)]
pub struct MeasureArgs {
    /// Binary verts file (LE u32 count + count x,y,z f32 triples, meters).
    pub verts_path: String,

    /// Output path for the facts-summary JSON artifact.
    #[arg(short, long)]
    pub output: String,

    /// Optional joint-positions file (same binary layout as verts).
    #[arg(long)]
    pub joints: Option<String>,

    /// Index of the pelvis joint within the joints file.
    #[arg(long, default_value_t = 0)]
    pub pelvis_index: usize,

    /// Embed per-key slice-debug facts in the artifact.
    #[arg(long)]
    pub debug: bool,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Measure(MeasureArgs),
}
