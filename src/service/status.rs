use chrono::DateTime;

use crate::{
    error::Error,
    status::StatusClient,
};

pub struct StatusService<'a> {
    client: &'a StatusClient,
}

impl<'a> StatusService<'a> {
    pub fn new(client: &'a StatusClient) -> Self {
        Self { client }
    }

    /// `evetime`: current EVE time plus whether Tranquility is up and how
    /// many players are logged in.
    pub async fn evetime(&self) -> Result<Vec<String>, Error> {
        let status = self.client.server_status().await?;

        let time = DateTime::from_timestamp(status.current_time, 0)
            .ok_or_else(|| {
                Error::MalformedStatus(format!("timestamp {} out of range", status.current_time))
            })?
            .time();
        let state = if status.server_open {
            "online"
        } else {
            "offline"
        };

        Ok(vec![format!(
            "{}, Tranquility is {} with {} players logged in",
            time.format("%H:%M:%S"),
            state,
            status.online_players
        )])
    }
}

#[cfg(test)]
mod tests {
    use evespai_test_utils::prelude::*;

    use super::*;
    use crate::status::StatusClient;

    /// Expect the UTC time-of-day plus server state and player count
    #[tokio::test]
    async fn renders_time_and_player_count() -> Result<(), TestError> {
        let mut test = TestSetup::new().await?;
        // 2014-01-01 00:10:30 UTC
        let endpoint = fixtures::status::mock_status_endpoint(
            &mut test.server,
            true,
            1_388_535_030,
            31_337,
            1,
        );

        let client = StatusClient::new(test.server.url());
        let lines = StatusService::new(&client).evetime().await.unwrap();

        assert_eq!(
            lines,
            vec!["00:10:30, Tranquility is online with 31337 players logged in".to_string()]
        );
        endpoint.assert();

        Ok(())
    }

    /// Expect a closed server to report offline
    #[tokio::test]
    async fn reports_offline_server() -> Result<(), TestError> {
        let mut test = TestSetup::new().await?;
        let _endpoint = fixtures::status::mock_status_endpoint(
            &mut test.server,
            false,
            1_388_535_030,
            0,
            1,
        );

        let client = StatusClient::new(test.server.url());
        let lines = StatusService::new(&client).evetime().await.unwrap();

        assert!(lines[0].contains("Tranquility is offline with 0 players"));

        Ok(())
    }
}
