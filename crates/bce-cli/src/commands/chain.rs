use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Subcommand};

use crate::chain::catalog::{DatasetCatalog, ModelCatalog};
use crate::chain::{GenerateOptions, JobChain, generate_chain, stage_launch};
use crate::commands::login::get_client_and_login_if_needed;
use crate::context::CliContext;

#[derive(Subcommand, Debug)]
pub enum ChainCommand {
    /// Instantiate the pipeline template for a model/dataset pair.
    Generate(GenerateArgs),
    /// Submit the first non-completed stage as an AIHC job.
    Next(ChainFileArgs),
    /// Render stage status.
    Show(ChainFileArgs),
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Model name to look up in the model catalog.
    #[arg(long)]
    pub model: String,
    /// Dataset name to look up in the dataset catalog.
    #[arg(long)]
    pub dataset: String,
    /// Resource pool the stages run in.
    #[arg(long = "pool")]
    pub resource_pool_id: String,
    #[arg(long, default_value = "models.csv")]
    pub models_csv: PathBuf,
    #[arg(long, default_value = "datasets.csv")]
    pub datasets_csv: PathBuf,
    /// Chain template to instantiate; the built-in AIAK pipeline when unset.
    #[arg(long)]
    pub template: Option<PathBuf>,
    /// Where the chain JSON is written. Stage containers rewrite the same
    /// path to advance the pipeline, so it must sit on a shared mount.
    #[arg(long, default_value = "/mnt/cluster/job-chain.json")]
    pub chain: PathBuf,
    /// Root for derived outputs (converted checkpoints, tokenized data).
    #[arg(long, default_value = "/mnt/cluster")]
    pub output_root: String,
    /// Chain name; `<model>-<dataset>` when unset.
    #[arg(long)]
    pub name: Option<String>,
}

#[derive(Args, Debug)]
pub struct ChainFileArgs {
    #[arg(long)]
    pub chain: PathBuf,
}

pub fn handle_command(command: ChainCommand, context: &mut CliContext) -> anyhow::Result<()> {
    match command {
        ChainCommand::Generate(args) => handle_generate(args, context),
        ChainCommand::Next(args) => handle_next(args, context),
        ChainCommand::Show(args) => handle_show(args, context),
    }
}

fn handle_generate(args: GenerateArgs, context: &mut CliContext) -> anyhow::Result<()> {
    let models = ModelCatalog::load(&args.models_csv)?;
    let datasets = DatasetCatalog::load(&args.datasets_csv)?;
    let model = models.get(&args.model)?;
    let dataset = datasets.get(&args.dataset)?;

    let template = match &args.template {
        Some(path) => JobChain::load(path)?,
        None => JobChain::aiak_template(),
    };

    let options = GenerateOptions {
        chain_name: args
            .name
            .unwrap_or_else(|| format!("{}-{}", args.model, args.dataset)),
        resource_pool_id: args.resource_pool_id,
        output_root: args.output_root,
    };
    let chain = generate_chain(template, model, dataset, &options)?;

    chain
        .save(&args.chain)
        .context("Failed to write the generated chain")?;
    context.terminal().print_success(&format!(
        "wrote chain '{}' ({} stages) to {}",
        chain.name,
        chain.stages.len(),
        args.chain.display()
    ));
    context.terminal().print(&format!(
        "submit the first stage with: bce chain next --chain {}",
        args.chain.display()
    ));
    Ok(())
}

fn handle_next(args: ChainFileArgs, context: &mut CliContext) -> anyhow::Result<()> {
    let chain = JobChain::load(&args.chain)?;
    let Some(index) = chain.first_pending() else {
        context.terminal().print_success("all stages completed");
        return Ok(());
    };

    let client = get_client_and_login_if_needed(context)?;

    let chain_path = args.chain.to_string_lossy();
    let (request, mut advanced) = stage_launch(&chain, index, &chain_path)?;
    let stage_name = request.name.clone();
    let response = client.create_job(&chain.resource_pool_id, &request)?;

    advanced.stages[index].job_id = Some(response.job_id.clone());
    advanced.save(&args.chain)?;

    context.terminal().print_success(&format!(
        "submitted stage '{}' ({}) as job {}",
        stage_name, chain.stages[index].stage, response.job_id
    ));
    Ok(())
}

fn handle_show(args: ChainFileArgs, context: &mut CliContext) -> anyhow::Result<()> {
    let chain = JobChain::load(&args.chain)?;

    context.terminal().print(&format!(
        "chain '{}' in pool {}",
        chain.name, chain.resource_pool_id
    ));
    for stage in &chain.stages {
        let marker = if stage.completed { "[x]" } else { "[ ]" };
        let job = stage
            .job_id
            .as_deref()
            .map(|id| format!("  job={id}"))
            .unwrap_or_default();
        context
            .terminal()
            .print(&format!("{} {}  ({}){}", marker, stage.name, stage.stage, job));
    }
    Ok(())
}
