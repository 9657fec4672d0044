use console::{Term, style};

pub struct Terminal {
    inner: Term,
}

impl Terminal {
    pub fn new() -> Self {
        Terminal {
            inner: Term::stdout(),
        }
    }

    pub fn print(&self, message: &str) {
        let _ = self.inner.write_line(message);
    }

    pub fn print_success(&self, message: &str) {
        let _ = self
            .inner
            .write_line(&format!("{} {}", style("ok").green().bold(), message));
    }

    pub fn print_error(&self, message: &str) {
        eprintln!("{} {}", style("error").red().bold(), message);
    }

    pub fn read_line(&self, prompt: &str) -> anyhow::Result<String> {
        let line = self.inner.read_line_initial_text(prompt)?;
        Ok(line)
    }

    pub fn read_confirmation(&self, prompt: &str) -> anyhow::Result<bool> {
        let response = self.read_line(prompt)?;
        match response.trim().to_lowercase().as_str() {
            "y" | "yes" => Ok(true),
            "n" | "no" => Ok(false),
            _ => Err(anyhow::anyhow!("Invalid response: {}", response)),
        }
    }

    /// Read a secret without echoing it.
    pub fn read_password(&self, prompt: &str) -> anyhow::Result<String> {
        dialoguer::Password::new()
            .with_prompt(prompt)
            .interact()
            .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))
    }
}
