use std::env;

use dialoguer::theme::ColorfulTheme;
use gofinances_config::{Config, ConfigManager};
use gofinances_core::{
    Clock, FixedClock, Highlights, Locale, LocaleFormatter, Period, SystemClock,
    TransactionRepository,
};
use gofinances_domain::{parse_calendar_date, Catalog, TransactionRecord};
use gofinances_storage_json::JsonFileStore;
use strsim::levenshtein;
use tracing::{info, warn};

use super::{
    commands,
    error::{CliError, CommandError, CommandResult},
    io as cli_io, output,
    registry::{CommandEntry, CommandRegistry},
};

pub const SCRIPT_ENV: &str = "GOFINANCES_CLI_SCRIPT";
pub const TODAY_ENV: &str = "GOFINANCES_TODAY";
const SUGGESTION_DISTANCE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

impl CliMode {
    pub fn from_env() -> Self {
        if env::var_os(SCRIPT_ENV).is_some() {
            CliMode::Script
        } else {
            CliMode::Interactive
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub theme: ColorfulTheme,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub store: JsonFileStore,
    pub clock: Box<dyn Clock>,
    pub formatter: LocaleFormatter,
    pub catalog: &'static Catalog,
    /// Last dashboard computation; cleared whenever the stored list may have changed.
    pub highlights: Highlights,
    /// Month shown by `resume`.
    pub period: Period,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::from_env()?;
        Self::with_parts(mode, config_manager, clock_from_env())
    }

    pub fn with_parts(
        mode: CliMode,
        config_manager: ConfigManager,
        clock: Box<dyn Clock>,
    ) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let config = config_manager.load()?;
        let data_root = config.resolve_data_root(config_manager.base_dir());
        let store = JsonFileStore::in_dir(&data_root)?;
        output::set_color_enabled(config.ui_color_enabled);
        let formatter = formatter_for(&config);
        let period = Period::containing(clock.today());
        info!(
            user = %config.active_user,
            store = %store.path().display(),
            "shell context ready"
        );

        Ok(Self {
            mode,
            registry,
            theme: ColorfulTheme::default(),
            config_manager,
            config,
            store,
            clock,
            formatter,
            catalog: Catalog::builtin(),
            highlights: Highlights::default(),
            period,
            running: true,
        })
    }

    pub fn prompt(&self) -> String {
        format!("gofinances [{}]> ", self.config.active_user)
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names()
    }

    pub fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    /// Fresh snapshot of the active user's records.
    pub fn records(&self) -> Result<Vec<TransactionRecord>, CommandError> {
        Ok(TransactionRepository::new(&self.store).load(&self.config.active_user)?)
    }

    pub fn persist_config(&self) -> CommandResult {
        self.config_manager.save(&self.config)?;
        Ok(())
    }

    pub fn switch_user(&mut self, user: &str) -> CommandResult {
        self.config.active_user = user.to_string();
        self.highlights = Highlights::NotComputed;
        self.persist_config()
    }

    pub fn switch_locale(&mut self, locale: Locale, currency: Option<&str>) -> CommandResult {
        self.config.locale = locale.tag().to_string();
        if let Some(code) = currency {
            self.config.currency = code.to_uppercase();
        }
        self.formatter = formatter_for(&self.config);
        self.highlights = Highlights::NotComputed;
        self.persist_config()
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let Some(handler) = self.registry.handler(command) else {
            self.suggest_command(raw);
            return Ok(LoopControl::Continue);
        };
        match handler(self, args) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{input}`. Type `help` to see available commands."
        ));
        let needle = input.to_lowercase();
        let best = self
            .registry
            .names()
            .into_iter()
            .map(|name| (levenshtein(name, &needle), name))
            .min_by_key(|(distance, _)| *distance);
        if let Some((distance, name)) = best {
            if distance <= SUGGESTION_DISTANCE {
                cli_io::print_info(format!("Did you mean `{name}`?"));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        cli_io::confirm_action(&self.theme, "Exit gofinances?", true)
            .map_err(|err| CliError::Input(err.to_string()))
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                cli_io::print_error(message);
                cli_io::print_info("Use `help <command>` for usage details.");
            }
            other => cli_io::print_error(other),
        }
    }
}

fn formatter_for(config: &Config) -> LocaleFormatter {
    let locale = Locale::from_tag(&config.locale).unwrap_or_else(|| {
        warn!(locale = %config.locale, "unsupported locale in config; using pt-BR");
        Locale::PtBr
    });
    LocaleFormatter::new(locale, config.currency.as_str())
}

/// `GOFINANCES_TODAY=YYYY-MM-DD` pins the calendar; anything else uses the system clock.
fn clock_from_env() -> Box<dyn Clock> {
    match env::var(TODAY_ENV) {
        Ok(raw) => match parse_calendar_date(&raw) {
            Some(date) => Box::new(FixedClock::new(date)),
            None => {
                warn!(value = %raw, "ignoring unparseable {TODAY_ENV}");
                Box::new(SystemClock)
            }
        },
        Err(_) => Box::new(SystemClock),
    }
}
