// src/pool/worker.rs
// =============================================================================
// The dispatch engine: a fixed pool of symmetric workers draining a shared
// job queue.
//
// Shape of the machinery:
//
//   Vec<ProbeJob>  ->  Arc<Mutex<VecDeque>>  ->  W spawned workers  ->  mpsc
//                        (claim-once queue)       (probe + pause)      (results)
//
// Each worker loops: pop the next job (the Mutex makes the claim atomic -
// exactly one worker ever sees a given job), announce it, execute the
// probe, announce the outcome, pause, send the result, repeat. When the
// queue runs dry the worker exits; join_all() over the handles is the
// completion barrier - only after every worker has exited do we drain the
// result channel. Nothing is streamed out early: a run either finishes or
// produces nothing.
//
// The post-job pause is deliberate load shedding, not a rate limiter: one
// flat sleep per worker slot caps throughput at roughly W requests per
// second. It lives in PoolConfig so tests can zero it.
//
// Rust concepts:
// - Arc<Mutex<...>>: shared ownership + exclusive access across tasks
// - tokio::spawn: each worker is an independent async task
// - mpsc channel: many worker senders, one collecting receiver
// =============================================================================

use futures::future::join_all;
use reqwest::Client;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;

use crate::probe::{self, ProbeJob, ProbeResult};

/// Tuning for one pool run.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Number of workers to spawn; also the maximum number of requests in
    /// flight at any moment.
    pub workers: usize,
    /// Flat pause applied by a worker after every job, success or failure.
    pub post_job_delay: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        PoolConfig {
            workers: 10,
            post_job_delay: Duration::from_secs(1),
        }
    }
}

/// Runs every job to completion and returns the results in arrival order
/// (i.e. scrambled - see the collector for reassembly).
///
/// Guarantees: exactly one result per job, at most `workers` requests in
/// flight, and no result is returned until every worker has exited.
pub async fn run_pool(jobs: Vec<ProbeJob>, client: Client, config: PoolConfig) -> Vec<ProbeResult> {
    let total = jobs.len();

    // The shared claim-once queue. pop_front() under the lock is the
    // atomic "this job is mine now" step.
    let queue = Arc::new(Mutex::new(VecDeque::from(jobs)));

    // Results flow back on an unbounded channel: capacity is bounded by
    // the job count, which we already hold in memory anyway.
    let (tx, mut rx) = mpsc::unbounded_channel();

    // Never spawn zero workers, or the run would hang with jobs unclaimed
    let workers = config.workers.max(1);

    let mut handles = Vec::with_capacity(workers);
    for _ in 0..workers {
        let queue = Arc::clone(&queue);
        let client = client.clone();
        let tx = tx.clone();
        let delay = config.post_job_delay;

        handles.push(tokio::spawn(async move {
            loop {
                // Claim inside a block so the lock guard drops before any
                // .await - holding a std Mutex across a suspension point
                // would stall the other workers
                let job = {
                    let mut queue = queue.lock().expect("job queue lock poisoned");
                    queue.pop_front()
                };
                let Some(job) = job else {
                    break; // queue exhausted, this worker is done
                };

                println!("=>  {} {}", job.method, job.target);

                let result = probe::execute(&client, &job).await;

                if result.outcome.is_success() {
                    println!("<=  {} {}", job.target, result.status_display());
                } else {
                    println!("[!]  {} {}", job.target, result.outcome.label());
                }

                // Flat per-slot pause - crude but effective load shedding
                tokio::time::sleep(delay).await;

                if tx.send(result).is_err() {
                    // Receiver gone; nothing left to report to
                    break;
                }
            }
        }));
    }

    // Drop the original sender so the channel closes once the last worker
    // clone is gone
    drop(tx);

    // Completion barrier: the run is over only when every worker has exited
    join_all(handles).await;

    // Only now drain the buffered results - no partial output mid-run
    let mut results = Vec::with_capacity(total);
    while let Some(result) = rx.recv().await {
        results.push(result);
    }
    results
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why Arc<Mutex<VecDeque>> instead of a channel for the jobs?
//    - We need "exactly one worker claims each job" semantics
//    - A Mutex-guarded pop_front() gives that atomically, and the queue
//      is fully seeded before the first worker starts, so workers never
//      need to *wait* for jobs - an empty queue simply means "done"
//
// 2. Why a std Mutex and not tokio::sync::Mutex?
//    - The critical section is a single pop_front() with no .await inside
//    - For short, non-suspending sections the std Mutex is the right tool
//
// 3. How does the result channel know it's finished?
//    - Every worker holds a clone of the sender; the original is dropped
//      right after spawning
//    - When the last worker exits, the last sender drops, and recv()
//      starts returning None once the buffer is drained
//
// 4. What does join_all give us over looping .await on each handle?
//    - The same thing, expressed as one future - a single completion
//      barrier for the whole pool
//
// 5. Why max(1) on the worker count?
//    - Zero workers would mean the jobs sit in the queue forever while
//      join_all returns immediately - an empty result set for a non-empty
//      job list, which violates the one-result-per-job guarantee
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::collect_ordered;
    use crate::probe::build_client;
    use url::Url;

    // Loopback port 1 refuses connections immediately, so these tests
    // exercise the full claim/execute/emit cycle without real targets and
    // without waiting on timeouts.
    fn refused_jobs(count: usize) -> Vec<ProbeJob> {
        (0..count)
            .map(|position| ProbeJob {
                position,
                target: Url::parse(&format!("http://127.0.0.1:1/job/{}", position)).unwrap(),
                method: "HEAD".to_string(),
                user_agent: "test-agent/1.0".to_string(),
            })
            .collect()
    }

    fn test_config(workers: usize) -> PoolConfig {
        PoolConfig {
            workers,
            post_job_delay: Duration::ZERO,
        }
    }

    async fn run(jobs: Vec<ProbeJob>, workers: usize) -> Vec<ProbeResult> {
        let client = build_client(Duration::from_secs(2), false).unwrap();
        run_pool(jobs, client, test_config(workers)).await
    }

    #[tokio::test]
    async fn test_one_result_per_job_no_gaps_no_duplicates() {
        let results = run(refused_jobs(9), 4).await;
        assert_eq!(results.len(), 9);

        let mut positions: Vec<usize> = results.iter().map(|r| r.position).collect();
        positions.sort_unstable();
        assert_eq!(positions, (0..9).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_single_worker_drains_everything() {
        let results = run(refused_jobs(5), 1).await;
        assert_eq!(results.len(), 5);
        // One worker claims in queue order, so arrival order is position
        // order too
        let positions: Vec<usize> = results.iter().map(|r| r.position).collect();
        assert_eq!(positions, vec![0, 1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_more_workers_than_jobs() {
        let results = run(refused_jobs(3), 50).await;
        assert_eq!(results.len(), 3);
    }

    #[tokio::test]
    async fn test_worker_count_does_not_affect_ordered_output() {
        let serial = collect_ordered(run(refused_jobs(8), 1).await);
        let parallel = collect_ordered(run(refused_jobs(8), 8).await);

        assert_eq!(serial.len(), parallel.len());
        for (a, b) in serial.iter().zip(parallel.iter()) {
            assert_eq!(a.position, b.position);
            assert_eq!(a.host, b.host);
            assert_eq!(a.path, b.path);
            assert_eq!(a.outcome.is_success(), b.outcome.is_success());
        }
    }

    #[tokio::test]
    async fn test_transport_failures_carry_no_response() {
        let results = run(refused_jobs(2), 2).await;
        for result in &results {
            assert!(!result.outcome.is_success());
            assert!(result.response_status.is_none());
            assert!(result.response_dump.is_none());
            // The dump of what we *tried* to send is still there
            assert!(result.request_dump.starts_with("HEAD /job/"));
        }
    }

    #[tokio::test]
    async fn test_zero_worker_config_is_clamped() {
        let results = run(refused_jobs(2), 0).await;
        assert_eq!(results.len(), 2);
    }

    #[tokio::test]
    async fn test_empty_job_list() {
        let results = run(Vec::new(), 4).await;
        assert!(results.is_empty());
    }
}
