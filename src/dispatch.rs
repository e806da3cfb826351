//! Host-facing boundary: one command invocation in, reply lines out.

use tracing::debug;

use crate::{
    command::{Command, CommandError},
    error::Error,
    model::app::AppState,
    service::{
        apicall::ApiCallService, market::MarketService, member::MemberService,
        resolver::Resolver, starbase::StarbaseService, status::StatusService, user::UserService,
    },
};

/// Reply for corporation commands used outside a full-access channel.
pub const ACCESS_DENIED: &str = "Concord denies you access on this channel!";

/// Handle one command invocation from `channel`.
///
/// Returns the reply lines the host should emit. An empty vec means the
/// input was not one of our commands; every failure produces exactly one
/// line.
pub async fn dispatch(state: &AppState, channel: &str, input: &str) -> Vec<String> {
    let command = match Command::parse(input) {
        Ok(command) => command,
        Err(CommandError::Unrecognized) => return Vec::new(),
        Err(err) => return vec![err.to_string()],
    };

    if command.requires_full_access() && !state.full_access_channels.contains(channel) {
        return vec![ACCESS_DENIED.to_string()];
    }

    debug!(?command, channel, "dispatching");

    match run(state, command).await {
        Ok(lines) => lines,
        Err(err) => vec![err.reply_line()],
    }
}

async fn run(state: &AppState, command: Command) -> Result<Vec<String>, Error> {
    match command {
        Command::Pos { system } => {
            StarbaseService::new(&state.sde, &state.spinner, corporation_id(state)?)
                .pos(system.as_deref())
                .await
        }
        Command::Whereis { character } => {
            member_service(state)?.whereis(&character).await
        }
        Command::Whoat { all, system } => member_service(state)?.whoat(&system, all).await,
        Command::Ship { all, shiptype } => member_service(state)?.ship(&shiptype, all).await,
        Command::Cache { api_call } => {
            ApiCallService::new(&state.spinner, corporation_id(state)?)
                .cache(&api_call)
                .await
        }
        Command::Chars { username } => UserService::new(&state.spinner).chars(&username).await,
        Command::Price {
            location,
            type_name,
        } => {
            MarketService::new(&state.sde, &state.spinner)
                .price(&type_name, location.as_deref())
                .await
        }
        Command::Markets => MarketService::new(&state.sde, &state.spinner).markets().await,
        Command::Evetime => StatusService::new(&state.status_client).evetime().await,
        Command::LocationId { name } => {
            let id = Resolver::new(&state.sde).location_id(&name).await?;
            Ok(vec![id.to_string()])
        }
        Command::LocationName { id } => {
            let location = Resolver::new(&state.sde).location(id).await?;
            Ok(vec![location.item_name])
        }
        Command::TypeId { name } => {
            let item_type = Resolver::new(&state.sde).item_type_by_name(&name).await?;
            Ok(vec![item_type.type_id.to_string()])
        }
        Command::TypeName { id } => {
            let item_type = Resolver::new(&state.sde).item_type(id).await?;
            Ok(vec![item_type.type_name])
        }
    }
}

fn corporation_id(state: &AppState) -> Result<i64, Error> {
    state.corporation_id.ok_or(Error::CorporationNotConfigured)
}

fn member_service(state: &AppState) -> Result<MemberService<'_>, Error> {
    Ok(MemberService::new(
        &state.sde,
        &state.spinner,
        corporation_id(state)?,
        state.max_lines,
    ))
}
