//! Built-in job descriptions, used when a request names a role but sends no description.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct JobRole {
    pub name: &'static str,
    pub description: &'static str,
}

pub const JOB_ROLES: &[JobRole] = &[
    JobRole {
        name: "Software Developer",
        description: "We are looking for a Software Developer skilled in Python, Django, REST API, \
            Docker, and Kubernetes. Experience in cloud infrastructure, CI/CD pipelines, and \
            relational databases like PostgreSQL is a plus.",
    },
    JobRole {
        name: "Data Scientist",
        description: "Seeking Data Scientist with strong skills in Python, Machine Learning, \
            Pandas, NumPy, and data visualization. Knowledge of TensorFlow, PyTorch, and cloud \
            services like AWS is desirable.",
    },
    JobRole {
        name: "DevOps Engineer",
        description: "DevOps Engineer needed with expertise in Docker, Kubernetes, Jenkins, \
            Terraform, CI/CD automation, and cloud infrastructure. Experience in monitoring \
            tools and scripting (Python/Bash) is essential.",
    },
];

/// Case-insensitive lookup on the trimmed role name.
pub fn find_description(role: &str) -> Option<&'static str> {
    let role = role.trim();
    JOB_ROLES
        .iter()
        .find(|r| r.name.eq_ignore_ascii_case(role))
        .map(|r| r.description)
}
