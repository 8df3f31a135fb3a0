//! Hydration of the final ranking.

use futures::{StreamExt, TryStreamExt, stream};

use crate::Result;

use super::fusion::FusedScore;
use super::signals::Hydrator;

/// Attach the full photo record to every entry of `ranking`.
///
/// At most `concurrency` calls are in flight; with `1` they run strictly one
/// after another in rank order. Output order always equals input order. The
/// first failure stops the stream and is returned as is, so no further calls
/// are started and no partial ranking escapes.
pub async fn hydrate_ranking(
    hydrator: &dyn Hydrator,
    ranking: Vec<FusedScore>,
    concurrency: usize,
) -> Result<Vec<FusedScore>> {
    let ids: Vec<_> = ranking.iter().map(|entry| entry.id).collect();
    let photos: Vec<_> = stream::iter(ids.into_iter().map(|id| hydrator.hydrate(id)))
        .buffered(concurrency.max(1))
        .try_collect()
        .await?;

    Ok(ranking
        .into_iter()
        .zip(photos)
        .map(|(mut entry, photo)| {
            entry.photo = Some(photo);
            entry
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FokalError;
    use crate::models::{Photo, PhotoBuilder, PhotoId};
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::time::Duration;

    /// Records call order; sleeps longer for lower ids so concurrent calls
    /// complete out of rank order.
    #[derive(Debug, Default)]
    struct RecordingHydrator {
        calls: Mutex<Vec<PhotoId>>,
        missing: Option<PhotoId>,
    }

    #[async_trait]
    impl Hydrator for RecordingHydrator {
        async fn hydrate(&self, id: PhotoId) -> Result<Photo> {
            self.calls.lock().unwrap().push(id);
            tokio::time::sleep(Duration::from_millis(50 - id as u64 * 10)).await;
            if self.missing == Some(id) {
                return Err(FokalError::NotFound(id));
            }
            Ok(PhotoBuilder::new(id).title(format!("photo {id}")).build())
        }
    }

    fn ranking() -> Vec<FusedScore> {
        vec![
            FusedScore::new(1, 0.9),
            FusedScore::new(3, 0.8),
            FusedScore::new(2, 0.7),
        ]
    }

    #[tokio::test(start_paused = true)]
    async fn test_sequential_hydration_in_rank_order() {
        let hydrator = RecordingHydrator::default();
        let hydrated = hydrate_ranking(&hydrator, ranking(), 1).await.unwrap();

        assert_eq!(*hydrator.calls.lock().unwrap(), vec![1, 3, 2]);
        let ids: Vec<_> = hydrated.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3, 2]);
        assert!(hydrated.iter().all(|e| e.photo.as_ref().unwrap().id == e.id));
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_hydration_keeps_rank_order() {
        let hydrator = RecordingHydrator::default();
        let hydrated = hydrate_ranking(&hydrator, ranking(), 3).await.unwrap();

        let ids: Vec<_> = hydrated.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3, 2]);
        assert_eq!(hydrator.calls.lock().unwrap().len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_aborts_and_stops_calling() {
        let hydrator = RecordingHydrator {
            missing: Some(3),
            ..Default::default()
        };
        let err = hydrate_ranking(&hydrator, ranking(), 1).await.unwrap_err();

        assert!(matches!(err, FokalError::NotFound(3)));
        assert_eq!(*hydrator.calls.lock().unwrap(), vec![1, 3]);
    }

    #[tokio::test]
    async fn test_empty_ranking_makes_no_calls() {
        let hydrator = RecordingHydrator::default();
        let hydrated = hydrate_ranking(&hydrator, Vec::new(), 1).await.unwrap();
        assert!(hydrated.is_empty());
        assert!(hydrator.calls.lock().unwrap().is_empty());
    }
}
