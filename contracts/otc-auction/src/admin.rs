//! Authorization checks gating configuration changes and forced cancellation.

use soroban_sdk::{Address, Env};

use crate::{
    errors::Error,
    events::{AdminChangedEventData, GovernanceChangedEventData},
    storage,
    types::Config,
};

/// Authenticate `caller` and require it to be the stored governance identity.
pub fn require_governance(config: &Config, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    if *caller != config.governance {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

/// Authenticate `caller` and require it to be the stored admin.
pub fn require_admin(config: &Config, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    if *caller != config.admin {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

pub fn is_governance(config: &Config, caller: &Address) -> bool {
    *caller == config.governance
}

pub fn set_governance(e: &Env, admin: Address, new_governance: Address) -> Result<(), Error> {
    let mut config = storage::get_config(e).ok_or(Error::NotInitialized)?;
    require_admin(&config, &admin)?;

    config.governance = new_governance.clone();
    storage::set_config(e, &config);
    storage::extend_instance_ttl(e);

    GovernanceChangedEventData {
        admin,
        new_governance,
    }
    .publish(e);

    Ok(())
}

pub fn transfer_admin(e: &Env, admin: Address, new_admin: Address) -> Result<(), Error> {
    let mut config = storage::get_config(e).ok_or(Error::NotInitialized)?;
    require_admin(&config, &admin)?;

    config.admin = new_admin.clone();
    storage::set_config(e, &config);
    storage::extend_instance_ttl(e);

    AdminChangedEventData {
        old_admin: admin,
        new_admin,
    }
    .publish(e);

    Ok(())
}
