use crate::cli::parser::{Commands, FlowArgs};
use crate::config::Config;
use crate::core::checkin::{CheckinLogic, Entry, ProviderOverrides};
use crate::core::profile::ProfileKind;
use crate::errors::AppResult;
use crate::ui::screen::InputMode;

impl FlowArgs {
    pub fn overrides(&self) -> ProviderOverrides {
        ProviderOverrides {
            latitude: self.lat,
            longitude: self.lon,
            accuracy: self.accuracy,
            deny: self.deny,
            fail_fix: self.fail_fix,
            street: self.street.clone(),
            no_street: self.no_street,
            fail_geocode: self.fail_geocode,
            delay_ms: self.delay_ms,
        }
    }

    pub fn mode(&self) -> InputMode {
        if self.confirm {
            InputMode::AutoConfirm
        } else if self.cancel {
            InputMode::AutoCancel
        } else {
            InputMode::Interactive
        }
    }

    pub fn profile_kind(&self, cfg: &Config) -> AppResult<ProfileKind> {
        match &self.profile {
            Some(code) => ProfileKind::from_code(code),
            None => Ok(cfg.default_profile),
        }
    }
}

/// Run the flow starting from `entry` with the given arguments.
pub async fn run_flow(args: &FlowArgs, cfg: &Config, entry: Entry) -> AppResult<()> {
    let profile = args.profile_kind(cfg)?;
    CheckinLogic::run(cfg, profile, &args.overrides(), args.mode(), entry).await?;
    Ok(())
}

/// Handle the `checkin` command: location screen only.
pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Checkin(args) = cmd {
        run_flow(args, cfg, Entry::Location).await?;
    }
    Ok(())
}
