use crate::query::QueryValues;

pub trait Filter: Send + Sync {
    fn query_values(&self) -> QueryValues;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFilter;

impl Filter for DefaultFilter {
    fn query_values(&self) -> QueryValues {
        QueryValues::new()
    }
}

#[derive(Debug, Clone, Default)]
pub struct AccountFilter {
    pub username: Option<String>,
    pub email: Option<String>,
    pub given_name: Option<String>,
    pub surname: Option<String>,
}

impl Filter for AccountFilter {
    fn query_values(&self) -> QueryValues {
        let mut values = QueryValues::new();
        add_if_set(&mut values, "username", self.username.as_deref());
        add_if_set(&mut values, "email", self.email.as_deref());
        add_if_set(&mut values, "givenName", self.given_name.as_deref());
        add_if_set(&mut values, "surname", self.surname.as_deref());
        values
    }
}

#[derive(Debug, Clone, Default)]
pub struct GroupFilter {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}

impl Filter for GroupFilter {
    fn query_values(&self) -> QueryValues {
        let mut values = QueryValues::new();
        add_if_set(&mut values, "name", self.name.as_deref());
        add_if_set(&mut values, "description", self.description.as_deref());
        add_if_set(&mut values, "status", self.status.as_deref());
        values
    }
}

fn add_if_set(values: &mut QueryValues, key: &str, value: Option<&str>) {
    if let Some(value) = value {
        if !value.is_empty() {
            values.add(key, value);
        }
    }
}
