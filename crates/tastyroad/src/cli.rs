use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tastyroad_meals::MealSlot;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "tastyroad")]
#[command(version)]
#[command(about = "Local meal logging with a consent-gated launch sequence")]
pub struct Cli {
    /// Data directory (defaults to $TASTYROAD_HOME or ~/.tastyroad)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one launch sequence against replayed content-host events
    Launch {
        /// Content locator, optionally suffixed with `@+<ms>` after launch; `-` emits an empty event
        #[arg(short, long = "event")]
        events: Vec<String>,

        /// Spacing for events without an explicit offset
        #[arg(long, default_value_t = 500)]
        event_delay_ms: u64,

        /// Override the configured minimum dwell
        #[arg(long)]
        dwell_ms: Option<u64>,
    },

    /// Manage the consent flag
    Consent {
        #[command(subcommand)]
        action: ConsentAction,
    },

    /// Manage launch points
    Points {
        #[command(subcommand)]
        action: Option<PointsAction>,
    },

    /// Manage the meal log
    Meals {
        #[command(subcommand)]
        action: MealsAction,
    },

    /// Manage meal templates
    Templates {
        #[command(subcommand)]
        action: TemplatesAction,
    },

    /// Show consent and launch configuration status
    Status,

    /// Print version information
    Version,
}

#[derive(Subcommand)]
pub enum ConsentAction {
    /// Record consent
    Accept,
    /// Forget recorded consent (testing only)
    Reset,
    /// Show whether consent is recorded
    Status,
}

#[derive(Subcommand)]
pub enum PointsAction {
    /// Show launch points
    Show,
    /// Set the primary launch point
    SetPrimary { value: String },
    /// Set the privacy launch point
    SetSecondary { value: String },
    /// Show the resume point, or store one if none is kept yet
    Resume { locator: Option<String> },
    /// Clear all persisted launch points
    Reset,
}

#[derive(Subcommand)]
pub enum MealsAction {
    /// List meals for a day
    List {
        /// Day stamp (YYYY-MM-DD, today, yesterday, tomorrow), defaults to today
        #[arg(long)]
        day: Option<String>,
    },
    /// Log a meal
    Add {
        #[arg(long)]
        slot: MealSlot,
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        note: String,
        #[arg(long)]
        day: Option<String>,
    },
    /// Delete a logged meal
    Delete {
        #[arg(long)]
        id: Uuid,
        #[arg(long)]
        day: Option<String>,
    },
    /// Delete every logged meal
    Clear,
}

#[derive(Subcommand)]
pub enum TemplatesAction {
    /// List templates
    List {
        #[arg(long)]
        slot: Option<MealSlot>,
    },
    /// Create a template collection
    AddCollection { name: String },
    /// Add a template to a collection
    Add {
        #[arg(long)]
        collection: Uuid,
        #[arg(long)]
        slot: MealSlot,
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        note: String,
    },
    /// Remove a template
    Remove { id: Uuid },
    /// Log a meal from a template
    Use {
        id: Uuid,
        #[arg(long)]
        day: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_version() {
        let cli = Cli::try_parse_from(["tastyroad", "version"]);
        assert!(cli.is_ok());
        assert!(matches!(cli.unwrap().command, Commands::Version));
    }

    #[test]
    fn test_cli_parse_launch() {
        let cli = Cli::try_parse_from([
            "tastyroad",
            "launch",
            "--event",
            "https://example.com@+4200",
            "-e",
            "-",
            "--dwell-ms",
            "100",
        ])
        .unwrap();
        if let Commands::Launch {
            events,
            event_delay_ms,
            dwell_ms,
        } = cli.command
        {
            assert_eq!(events, vec!["https://example.com@+4200", "-"]);
            assert_eq!(event_delay_ms, 500);
            assert_eq!(dwell_ms, Some(100));
        } else {
            panic!("Expected Launch command");
        }
    }

    #[test]
    fn test_cli_parse_meal_add() {
        let cli = Cli::try_parse_from([
            "tastyroad",
            "--data-dir",
            "/tmp/tasty",
            "meals",
            "add",
            "--slot",
            "lunch",
            "--title",
            "Rice",
        ])
        .unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/tasty")));
        if let Commands::Meals {
            action: MealsAction::Add { slot, title, note, day },
        } = cli.command
        {
            assert_eq!(slot, MealSlot::Lunch);
            assert_eq!(title, "Rice");
            assert_eq!(note, "");
            assert_eq!(day, None);
        } else {
            panic!("Expected Meals Add command");
        }
    }

    #[test]
    fn test_cli_rejects_unknown_slot() {
        let cli = Cli::try_parse_from([
            "tastyroad", "meals", "add", "--slot", "brunch", "--title", "x",
        ]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_cli_parse_subcommands() {
        let commands: [&[&str]; 5] = [
            &["tastyroad", "consent", "accept"],
            &["tastyroad", "points"],
            &["tastyroad", "points", "set-primary", "https://example.com"],
            &["tastyroad", "templates", "list"],
            &["tastyroad", "status"],
        ];

        for args in commands {
            let cli = Cli::try_parse_from(args);
            assert!(cli.is_ok(), "Failed to parse {:?}", args);
        }
    }
}
