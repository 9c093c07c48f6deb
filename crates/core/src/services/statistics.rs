//! Statistics service.

use ideaboard_common::AppResult;
use ideaboard_db::repositories::{Statistics, StatisticsRepository};

#[derive(Clone)]
pub struct StatisticsService {
    statistics_repo: StatisticsRepository,
}

impl StatisticsService {
    #[must_use]
    pub const fn new(statistics_repo: StatisticsRepository) -> Self {
        Self { statistics_repo }
    }

    /// Total ideas, comments and votes in the store.
    pub async fn get(&self) -> AppResult<Statistics> {
        self.statistics_repo.totals().await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use maplit::btreemap;
    use sea_orm::{DatabaseBackend, MockDatabase, Value};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_get_statistics() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[btreemap! {
                    "total_ideas" => Value::from(1_i64),
                    "total_comments" => Value::from(1_i64),
                    "total_votes" => Value::from(3_i64),
                }]])
                .into_connection(),
        );
        let service = StatisticsService::new(StatisticsRepository::new(db));

        let stats = service.get().await.unwrap();

        assert_eq!(stats.total_votes, 3);
    }
}
