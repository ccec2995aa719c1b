use anyhow::{Context, Result};
use clap::Command;

use crate::args::{GeneratorArgs, invoking_program_name};
use crate::context::{GenerationContext, NameSystems};
use crate::discovery::DiscoveryBuilder;

impl<C> GeneratorArgs<C> {
    /// Runs the whole generation pipeline: parse flags (unless opted out),
    /// resolve input directories into a discovery builder, construct the
    /// generation context, apply the verify-only mode, ask `select` for the
    /// packages to generate, and execute them against the output base.
    ///
    /// `select` is the sole customization point: it translates the typed
    /// packages the context discovered into concrete generation units.
    ///
    /// Stages run strictly in order and the first failure terminates the run
    /// with a stage-identifying error. When default flag parsing is enabled
    /// and the argument vector does not parse, the process exits non-zero
    /// before any generation logic runs. A minimal generator is:
    ///
    /// ```ignore
    /// GeneratorArgs::default().execute::<MyContext, _>(name_systems, "public", my_packages)
    /// ```
    pub fn execute<Ctx, F>(
        mut self,
        name_systems: NameSystems<Ctx::Namer>,
        default_system: &str,
        select: F,
    ) -> Result<()>
    where
        Ctx: GenerationContext,
        Ctx::Builder: DiscoveryBuilder + Default,
        F: FnOnce(&mut Ctx, &GeneratorArgs<C>) -> Vec<Ctx::Package>,
    {
        if self.default_flag_parsing {
            let command = self.add_flags(Command::new(invoking_program_name()));
            // Exits the process on a parse failure.
            let matches = command.get_matches();
            self.apply_matches(&matches);
        }

        let builder = self.new_builder::<Ctx::Builder>()?;

        let mut context =
            Ctx::new(builder, name_systems, default_system).context("failed making a context")?;
        context.set_verify_only(self.verify_only);

        let packages = select(&mut context, &self);
        context
            .execute_packages(&self.output_base, packages)
            .context("failed executing generator")?;

        Ok(())
    }
}
