//! Bootstrap command implementation.

use crate::app::api::{BootstrapReport, FileOutcome};
use crate::domain::AppError;
use crate::domain::layout::{ENV_FILE, SAMPLE_DOCUMENT};

pub(crate) const NEXT_STEPS: &str = "\
Next steps:
  1. Edit .env and add your OPENAI_API_KEY and UNSPLASH_ACCESS_KEY
  2. Activate the virtual environment: source venv/bin/activate
  3. Start the application: python app.py
  4. Open http://localhost:5000 in your browser";

pub fn run_bootstrap() -> Result<(), AppError> {
    println!("🚀 Setting up Word to PowerPoint converter...");
    let report = crate::app::api::bootstrap()?;
    print_report(&report);
    Ok(())
}

fn print_report(report: &BootstrapReport) {
    println!("✅ {}", report.python_version);
    println!("✅ Virtual environment ready at {}/", report.venv_dir);
    println!("✅ Dependencies installed");
    println!("✅ Created {} directories", report.directories.len());
    for image in &report.images {
        println!("✅ Generated {}", image);
    }
    match report.env_file {
        FileOutcome::Created => {
            println!("✅ Created {} (replace the placeholder API keys)", ENV_FILE)
        }
        FileOutcome::Preserved => println!("ℹ️  {} already exists, left unchanged", ENV_FILE),
    }
    match report.sample_document {
        FileOutcome::Created => println!("✅ Created sample document {}", SAMPLE_DOCUMENT),
        FileOutcome::Preserved => {
            println!("ℹ️  {} already exists, left unchanged", SAMPLE_DOCUMENT)
        }
    }
    if !report.scripts.marked.is_empty() {
        println!("✅ Marked {} script(s) executable", report.scripts.marked.len());
    }
    for (path, error) in &report.scripts.failed {
        println!("⚠️  Could not mark {} executable: {}", path, error);
    }

    println!();
    println!("🎉 Setup complete!");
    println!();
    println!("{}", NEXT_STEPS);
}
