//! `session`: a session.
//!
//! Login and logout live on [`Session`](crate::Session) itself.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use super::*;
use crate::{record, rpc};

record! {
    pub struct SessionRecord {
        /// Unique identifier/object reference
        uuid: String = "uuid",
        /// Currently connected host
        this_host: HostRef = "this_host",
        /// Currently connected user
        this_user: UserRef = "this_user",
        /// Timestamp for last time session was active
        last_active: DateTime<Utc> = "last_active",
        /// True if this session relates to a intra-pool login, false otherwise
        pool: bool = "pool",
        /// additional configuration
        other_config: HashMap<String, String> = "other_config",
        /// true iff this session was created using local superuser credentials
        is_local_superuser: bool = "is_local_superuser",
        /// references the subject instance that created the session. If a session instance has
        /// is_local_superuser set, then the value of this field is undefined.
        subject: SubjectRef = "subject",
        /// time when session was last validated
        validation_time: DateTime<Utc> = "validation_time",
        /// the subject identifier of the user that was externally authenticated. If a session
        /// instance has is_local_superuser set, then the value of this field is undefined.
        auth_user_sid: String = "auth_user_sid",
        /// the subject name of the user that was externally authenticated. If a session instance
        /// has is_local_superuser set, then the value of this field is undefined.
        auth_user_name: String = "auth_user_name",
        /// list with all RBAC permissions for this session
        rbac_permissions: Vec<String> = "rbac_permissions",
        /// list of tasks created using the current session
        tasks: Vec<TaskRef> = "tasks",
        /// references the parent session that created this session
        parent: SessionRef = "parent",
        /// a key string provided by a API user to distinguish itself from other users sharing the
        /// same login name
        originator: String = "originator",
        /// indicates whether this session was authenticated using a client certificate
        client_certificate: bool = "client_certificate",
    }
}

rpc! {
    pub fn get_record("session.get_record", self_: &SessionRef = "self") -> SessionRecord;
    pub fn get_by_uuid("session.get_by_uuid", uuid: &str = "uuid") -> SessionRef;
    pub fn get_uuid("session.get_uuid", self_: &SessionRef = "self") -> String;
    pub fn get_this_host("session.get_this_host", self_: &SessionRef = "self") -> HostRef;
    pub fn get_this_user("session.get_this_user", self_: &SessionRef = "self") -> UserRef;
    pub fn get_last_active("session.get_last_active", self_: &SessionRef = "self") -> DateTime<Utc>;
    pub fn get_pool("session.get_pool", self_: &SessionRef = "self") -> bool;
    pub fn get_other_config(
        "session.get_other_config",
        self_: &SessionRef = "self",
    ) -> HashMap<String, String>;
    pub fn get_is_local_superuser(
        "session.get_is_local_superuser",
        self_: &SessionRef = "self",
    ) -> bool;
    pub fn get_subject("session.get_subject", self_: &SessionRef = "self") -> SubjectRef;
    pub fn get_validation_time(
        "session.get_validation_time",
        self_: &SessionRef = "self",
    ) -> DateTime<Utc>;
    pub fn get_auth_user_sid("session.get_auth_user_sid", self_: &SessionRef = "self") -> String;
    pub fn get_auth_user_name("session.get_auth_user_name", self_: &SessionRef = "self") -> String;
    pub fn get_rbac_permissions(
        "session.get_rbac_permissions",
        self_: &SessionRef = "self",
    ) -> Vec<String>;
    pub fn get_tasks("session.get_tasks", self_: &SessionRef = "self") -> Vec<TaskRef>;
    pub fn get_parent("session.get_parent", self_: &SessionRef = "self") -> SessionRef;
    pub fn get_originator("session.get_originator", self_: &SessionRef = "self") -> String;
    pub fn get_client_certificate(
        "session.get_client_certificate",
        self_: &SessionRef = "self",
    ) -> bool;
    pub fn set_other_config(
        "session.set_other_config",
        self_: &SessionRef = "self",
        value: &HashMap<String, String> = "value",
    ) -> ();
    pub fn add_to_other_config(
        "session.add_to_other_config",
        self_: &SessionRef = "self",
        key: &str = "key",
        value: &str = "value",
    ) -> ();
    pub fn remove_from_other_config(
        "session.remove_from_other_config",
        self_: &SessionRef = "self",
        key: &str = "key",
    ) -> ();
    /// Change the account password; if your session is authenticated with root privileges then the
    /// old_pwd is validated and the new_pwd is set regardless
    pub fn change_password(
        "session.change_password",
        old_pwd: &str = "old_pwd",
        new_pwd: &str = "new_pwd",
    ) -> ();
    pub fn create_from_db_file(
        "session.create_from_db_file",
        filename: &str = "filename",
    ) -> SessionRef, async async_create_from_db_file;
    pub fn get_all_subject_identifiers(
        "session.get_all_subject_identifiers",
    ) -> Vec<String>, async async_get_all_subject_identifiers;
    /// Log out all sessions associated to a user subject-identifier, except the session associated
    /// with the context calling this function
    pub fn logout_subject_identifier(
        "session.logout_subject_identifier",
        subject_identifier: &str = "subject_identifier",
    ) -> (), async async_logout_subject_identifier;
}
