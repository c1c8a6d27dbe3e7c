//! JSON roundtrip for the crate's boundary types.
//!
//! `RawProject` is the shape an external project-file parser would produce;
//! `Task`/`Resource` are what `ProjectIndex` exposes back out. All three
//! derive `Serialize`/`Deserialize` so a caller can persist or transmit a
//! project without this crate's involvement in the wire format.

use rcpsp_core::{build_project, RawProject, Resource, Task};

#[test]
fn raw_project_roundtrips_through_json() {
    let raw = RawProject::new(
        vec![0, 3, 5, 0],
        vec![vec![0], vec![1], vec![1], vec![0]],
        vec![1],
        vec![(0, 1), (1, 2), (2, 3)],
    );

    let json = serde_json::to_string(&raw).unwrap();
    let back: RawProject = serde_json::from_str(&json).unwrap();

    assert_eq!(back.durations, raw.durations);
    assert_eq!(back.requirements, raw.requirements);
    assert_eq!(back.capacities, raw.capacities);
    assert_eq!(back.precedences, raw.precedences);
}

#[test]
fn task_and_resource_roundtrip_through_json() {
    let project = build_project(RawProject::new(
        vec![0, 3, 5, 0],
        vec![vec![0], vec![1], vec![1], vec![0]],
        vec![1],
        vec![(0, 1), (1, 2), (2, 3)],
    ))
    .unwrap();

    for task in project.tasks() {
        let json = serde_json::to_string(task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(&back, task);
    }

    for resource in project.resources() {
        let json = serde_json::to_string(resource).unwrap();
        let back: Resource = serde_json::from_str(&json).unwrap();
        assert_eq!(back, *resource);
    }
}
