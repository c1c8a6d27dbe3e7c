//! Schedule metrics, computed on demand from a decoded schedule.

use crate::model::ProjectIndex;
use crate::scheduler::Schedule;

/// Summary metrics for a decoded schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct Metrics {
    /// The schedule's makespan.
    pub makespan: u64,
    /// Per-resource utilization: `(Σ d_i · r_{i,k}) / (c_k · makespan)`,
    /// indexed the same as [`ProjectIndex::resources`]. `0.0` for a
    /// resource with zero capacity.
    pub resource_utilization: Vec<f64>,
    /// Mean of [`Metrics::resource_utilization`] over resources with
    /// nonzero capacity. `0.0` if no resource has nonzero capacity.
    pub mean_utilization: f64,
    /// Average number of tasks running concurrently, `(Σ d_i) / makespan`,
    /// counting only tasks with `d_i > 0`.
    pub average_concurrency: f64,
}

impl Metrics {
    /// Computes metrics for `schedule` against `project`.
    ///
    /// Returns all-zero metrics if the makespan is zero (a degenerate
    /// project with no real work).
    pub fn calculate(project: &ProjectIndex, schedule: &Schedule) -> Self {
        let makespan = schedule.makespan(project);

        if makespan == 0 {
            return Self {
                makespan: 0,
                resource_utilization: vec![0.0; project.resource_count()],
                mean_utilization: 0.0,
                average_concurrency: 0.0,
            };
        }

        let resource_utilization: Vec<f64> = (0..project.resource_count())
            .map(|k| {
                let capacity = project.resource(k).capacity;
                if capacity == 0 {
                    return 0.0;
                }
                let total_demand: u64 = project
                    .tasks()
                    .iter()
                    .map(|t| t.duration * t.requirements[k])
                    .sum();
                total_demand as f64 / (capacity as f64 * makespan as f64)
            })
            .collect();

        let considered: Vec<f64> = (0..project.resource_count())
            .filter(|&k| project.resource(k).capacity > 0)
            .map(|k| resource_utilization[k])
            .collect();
        let mean_utilization = if considered.is_empty() {
            0.0
        } else {
            considered.iter().sum::<f64>() / considered.len() as f64
        };

        let total_duration: u64 = project.tasks().iter().map(|t| t.duration).sum();
        let average_concurrency = total_duration as f64 / makespan as f64;

        Self {
            makespan,
            resource_utilization,
            mean_utilization,
            average_concurrency,
        }
    }
}
