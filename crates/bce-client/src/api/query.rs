use uuid::Uuid;

/// Accumulates the query parameters of one request in the order the caller
/// names them. Flags are parameters with an empty value (`?attach`); the
/// canonical query string keeps their trailing `=` so the signature covers
/// them.
#[derive(Debug, Default)]
pub(crate) struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param(mut self, name: &str, value: impl ToString) -> Self {
        self.pairs.push((name.to_string(), value.to_string()));
        self
    }

    pub fn optional(mut self, name: &str, value: Option<impl ToString>) -> Self {
        if let Some(value) = value {
            self.pairs.push((name.to_string(), value.to_string()));
        }
        self
    }

    pub fn flag(mut self, name: &str) -> Self {
        self.pairs.push((name.to_string(), String::new()));
        self
    }

    /// Idempotency token sent with create operations.
    pub fn client_token(self) -> Self {
        let token = Uuid::new_v4().to_string();
        self.param("clientToken", token)
    }

    pub fn build(self) -> Vec<(String, String)> {
        self.pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order_and_empty_flags() {
        let query = Query::new()
            .param("pageNo", 1)
            .flag("attach")
            .optional("name", None::<&str>)
            .optional("vpcId", Some("vpc-1"))
            .build();
        assert_eq!(
            query,
            vec![
                ("pageNo".to_string(), "1".to_string()),
                ("attach".to_string(), String::new()),
                ("vpcId".to_string(), "vpc-1".to_string()),
            ]
        );
    }

    #[test]
    fn client_token_is_a_uuid() {
        let query = Query::new().client_token().build();
        assert_eq!(query.len(), 1);
        assert_eq!(query[0].0, "clientToken");
        assert!(Uuid::parse_str(&query[0].1).is_ok());
    }
}
