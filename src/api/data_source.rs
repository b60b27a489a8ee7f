use crate::record;

record! {
    /// A metric a host can log into its round robin databases, see
    /// `host.get_data_sources`.
    pub struct DataSourceRecord {
        name_label: String = "name_label",
        name_description: String = "name_description",
        /// true if the data source is being logged
        enabled: bool = "enabled",
        /// true if the data source is enabled by default, non-default data
        /// sources cannot be disabled
        standard: bool = "standard",
        units: String = "units",
        min: f64 = "min",
        max: f64 = "max",
        /// current value
        value: f64 = "value",
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use xmlrpc::Value;

    use super::*;
    use crate::marshal::{FromValue, ToValue};

    fn wire() -> Value {
        [
            ("name_label", Value::from("cpu0")),
            ("name_description", Value::from("Physical cpu usage for cpu 0")),
            ("enabled", Value::Bool(true)),
            ("standard", Value::Bool(true)),
            ("units", Value::from("(fraction)")),
            ("min", Value::Double(0.0)),
            ("max", Value::Double(1.0)),
            ("value", Value::Double(0.0625)),
            ("added_in_a_later_release", Value::from("ignored")),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn extra_members_are_ignored() {
        let record = DataSourceRecord::from_value("host.get_data_sources -> [0]", &wire()).unwrap();

        assert_eq!(record.name_label, "cpu0");
        assert!(record.enabled);
        assert_eq!(record.value, 0.0625);

        let back = record.to_value("").unwrap();
        assert_eq!(back.as_struct().unwrap().len(), 8);
        assert_eq!(DataSourceRecord::from_value("", &back).unwrap(), record);
    }

    #[test]
    fn missing_member_names_the_path() {
        let mut value = wire();
        if let Value::Struct(members) = &mut value {
            members.shift_remove("units");
        }

        let err = DataSourceRecord::from_value("host.get_data_sources -> [4]", &value).unwrap_err();
        assert_eq!(err.context(), "host.get_data_sources -> [4].units");
        assert!(err.to_string().ends_with("missing field"));
    }

    #[test]
    fn nested_path() {
        let sources = Value::Array(vec![wire(), wire(), {
            let mut bad = wire();
            if let Value::Struct(members) = &mut bad {
                members.insert("max".to_string(), Value::from("big"));
            }
            bad
        }]);

        let err = Vec::<DataSourceRecord>::from_value("host.get_data_sources -> ", &sources)
            .unwrap_err();
        assert_eq!(err.context(), "host.get_data_sources -> [2].max");
    }
}
