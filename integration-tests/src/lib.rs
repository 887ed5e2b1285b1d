// Intentionally empty; this crate only carries the deployed-stack tests.
