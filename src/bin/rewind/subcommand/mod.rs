use color_eyre::eyre;

mod step;
mod walk;

#[derive(Debug, clap::Subcommand)]
pub enum Subcommand {
    Walk(walk::Args),
    Step(step::Args),
}

impl Subcommand {
    pub fn run(&self) -> eyre::Result<()> {
        match self {
            Subcommand::Walk(args) => args.run()?,
            Subcommand::Step(args) => args.run()?,
        }

        Ok(())
    }
}
