pub mod variable_for_property;
