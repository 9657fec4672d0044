use clap::{Args, Subcommand};

use crate::commands::login::get_client_and_login_if_needed;
use crate::context::CliContext;

#[derive(Subcommand, Debug)]
pub enum JobCommand {
    /// List jobs in a resource pool.
    List(ListArgs),
    /// Show one job.
    Get(JobRefArgs),
    /// Stop a running job.
    Stop(JobRefArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Resource pool to list from.
    #[arg(long = "pool")]
    pub resource_pool_id: String,
    #[arg(long, default_value_t = 1)]
    pub page_no: u32,
    #[arg(long, default_value_t = 20)]
    pub page_size: u32,
}

#[derive(Args, Debug)]
pub struct JobRefArgs {
    #[arg(long = "pool")]
    pub resource_pool_id: String,
    pub job_id: String,
}

pub fn handle_command(command: JobCommand, context: &mut CliContext) -> anyhow::Result<()> {
    let client = get_client_and_login_if_needed(context)?;

    match command {
        JobCommand::List(args) => {
            let response = client.list_jobs(&args.resource_pool_id, args.page_no, args.page_size)?;
            for job in &response.jobs {
                context.terminal().print(&format!(
                    "{}  {}  {}  created={}",
                    job.job_id, job.name, job.status, job.created_at
                ));
            }
            context
                .terminal()
                .print(&format!("{} jobs total", response.total_count));
        }
        JobCommand::Get(args) => {
            let job = client.get_job(&args.resource_pool_id, &args.job_id)?;
            context.terminal().print(&format!(
                "{}  {}  {}\n  image={}\n  replicas={}  created={}  finished={}",
                job.job_id,
                job.name,
                job.status,
                job.image,
                job.replicas,
                job.created_at,
                job.finished_at
            ));
        }
        JobCommand::Stop(args) => {
            client.stop_job(&args.resource_pool_id, &args.job_id)?;
            context
                .terminal()
                .print_success(&format!("stop requested for {}", args.job_id));
        }
    }

    Ok(())
}
