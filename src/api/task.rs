//! `task`: a long-running asynchronous task.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use super::*;
use crate::{record, rpc};

record! {
    pub struct TaskRecord {
        /// Unique identifier/object reference
        uuid: String = "uuid",
        /// a human-readable name
        name_label: String = "name_label",
        /// a notes field containing human-readable description
        name_description: String = "name_description",
        /// list of the operations allowed in this state. This list is advisory only and the server
        /// state may have changed by the time this field is read by a client.
        allowed_operations: Vec<TaskAllowedOperations> = "allowed_operations",
        /// links each of the running tasks using this object (by reference) to a current_operation
        /// enum which describes the nature of the task.
        current_operations: HashMap<String, TaskAllowedOperations> = "current_operations",
        /// Time task was created
        created: DateTime<Utc> = "created",
        /// Time task finished (i.e. succeeded or failed). If task-status is pending, then the value
        /// of this field has no meaning
        finished: DateTime<Utc> = "finished",
        /// current status of the task
        status: TaskStatusType = "status",
        /// the host on which the task is running
        resident_on: HostRef = "resident_on",
        /// This field contains the estimated fraction of the task which is complete. This field
        /// should not be used to determine whether the task is complete - for this the status field
        /// of the task should be used.
        progress: f64 = "progress",
        /// if the task has completed successfully, this field contains the type of the encoded
        /// result (i.e. name of the class whose reference is in the result field). Undefined
        /// otherwise.
        typ: String = "type",
        /// if the task has completed successfully, this field contains the result value (either
        /// Void or an object reference). Undefined otherwise.
        result: String = "result",
        /// if the task has failed, this field contains the set of associated error strings.
        /// Undefined otherwise.
        error_info: Vec<String> = "error_info",
        /// additional configuration
        other_config: HashMap<String, String> = "other_config",
        /// Ref pointing to the task this is a substask of.
        subtask_of: TaskRef = "subtask_of",
        /// List pointing to all the substasks.
        subtasks: Vec<TaskRef> = "subtasks",
        /// Function call trace for debugging.
        backtrace: String = "backtrace",
    }
}

rpc! {
    pub fn get_record("task.get_record", self_: &TaskRef = "self") -> TaskRecord;
    pub fn get_by_uuid("task.get_by_uuid", uuid: &str = "uuid") -> TaskRef;
    pub fn get_by_name_label("task.get_by_name_label", label: &str = "label") -> Vec<TaskRef>;
    /// Create a new task object which must be manually destroyed.
    pub fn create(
        "task.create",
        label: &str = "label",
        description: &str = "description",
    ) -> TaskRef;
    /// Destroy the task object
    pub fn destroy("task.destroy", self_: &TaskRef = "self") -> ();
    pub fn get_uuid("task.get_uuid", self_: &TaskRef = "self") -> String;
    pub fn get_name_label("task.get_name_label", self_: &TaskRef = "self") -> String;
    pub fn get_name_description("task.get_name_description", self_: &TaskRef = "self") -> String;
    pub fn get_allowed_operations(
        "task.get_allowed_operations",
        self_: &TaskRef = "self",
    ) -> Vec<TaskAllowedOperations>;
    pub fn get_current_operations(
        "task.get_current_operations",
        self_: &TaskRef = "self",
    ) -> HashMap<String, TaskAllowedOperations>;
    pub fn get_created("task.get_created", self_: &TaskRef = "self") -> DateTime<Utc>;
    pub fn get_finished("task.get_finished", self_: &TaskRef = "self") -> DateTime<Utc>;
    pub fn get_status("task.get_status", self_: &TaskRef = "self") -> TaskStatusType;
    pub fn get_resident_on("task.get_resident_on", self_: &TaskRef = "self") -> HostRef;
    pub fn get_progress("task.get_progress", self_: &TaskRef = "self") -> f64;
    pub fn get_type("task.get_type", self_: &TaskRef = "self") -> String;
    pub fn get_result("task.get_result", self_: &TaskRef = "self") -> String;
    pub fn get_error_info("task.get_error_info", self_: &TaskRef = "self") -> Vec<String>;
    pub fn get_other_config(
        "task.get_other_config",
        self_: &TaskRef = "self",
    ) -> HashMap<String, String>;
    pub fn get_subtask_of("task.get_subtask_of", self_: &TaskRef = "self") -> TaskRef;
    pub fn get_subtasks("task.get_subtasks", self_: &TaskRef = "self") -> Vec<TaskRef>;
    pub fn get_backtrace("task.get_backtrace", self_: &TaskRef = "self") -> String;
    pub fn set_status(
        "task.set_status",
        self_: &TaskRef = "self",
        value: &TaskStatusType = "value",
    ) -> ();
    pub fn set_progress("task.set_progress", self_: &TaskRef = "self", value: f64 = "value") -> ();
    pub fn set_result("task.set_result", self_: &TaskRef = "self", value: &str = "value") -> ();
    pub fn set_error_info(
        "task.set_error_info",
        self_: &TaskRef = "self",
        value: &[String] = "value",
    ) -> ();
    pub fn set_other_config(
        "task.set_other_config",
        self_: &TaskRef = "self",
        value: &HashMap<String, String> = "value",
    ) -> ();
    pub fn set_other_config2("task.set_other_config", self_: &TaskRef = "self") -> ();
    pub fn add_to_other_config(
        "task.add_to_other_config",
        self_: &TaskRef = "self",
        key: &str = "key",
        value: &str = "value",
    ) -> ();
    pub fn add_to_other_config2("task.add_to_other_config", self_: &TaskRef = "self") -> ();
    pub fn remove_from_other_config(
        "task.remove_from_other_config",
        self_: &TaskRef = "self",
        key: &str = "key",
    ) -> ();
    pub fn remove_from_other_config2(
        "task.remove_from_other_config",
        self_: &TaskRef = "self",
    ) -> ();
    /// Request that a task be cancelled. Note that a task may fail to be cancelled and may complete
    /// or fail normally and note that, even when a task does cancel, it might take an arbitrary
    /// amount of time.
    ///
    /// Errors:
    /// OPERATION_NOT_ALLOWED - You attempted an operation that was not allowed.
    pub fn cancel("task.cancel", task: &TaskRef = "task") -> (), async async_cancel;
    pub fn get_all("task.get_all") -> Vec<TaskRef>;
    pub fn get_all_records("task.get_all_records") -> HashMap<TaskRef, TaskRecord>;
}
