//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixture builders so tests don't each hand-roll
//! a slightly different well-formed service.

#![doc(hidden)]

use crate::types::{Project, Service};

/// Create a well-formed service with no projects.
pub fn make_service(id: &str, title: &str, keywords: &[&str]) -> Service {
    Service {
        id: id.to_string(),
        title: title.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        normalized_keywords: None,
        summary: format!("Summary for {}", title),
        projects: vec![],
    }
}

/// Create a well-formed project. `service_type` is left for the caller.
pub fn make_project(id: &str, name: &str, tech_stack: &[&str]) -> Project {
    Project {
        id: id.to_string(),
        name: name.to_string(),
        service_type: String::new(),
        description: format!("Description of {}", name),
        tech_stack: tech_stack.iter().map(|t| t.to_string()).collect(),
        year: Some(2023),
    }
}

/// Attach projects to a service, stamping each with the service's title.
pub fn with_projects(mut service: Service, projects: Vec<Project>) -> Service {
    service.projects = projects
        .into_iter()
        .map(|mut project| {
            project.service_type = service.title.clone();
            project
        })
        .collect();
    service
}
