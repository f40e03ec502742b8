//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of dependency management for reports.

mod report_builder;
mod report_read_model;

pub use report_builder::DependencyManagementReportBuilder;
pub use report_read_model::{
    DependencyManagementReport, ManagedVersionView, ManagementSection, SectionStatus,
};
