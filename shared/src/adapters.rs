use crate::core::{LinkStore, ShortLink};
use async_trait::async_trait;
use aws_sdk_dynamodb::{types::AttributeValue, Client};

#[derive(Debug)]
pub struct DynamoDbLinkStore {
    table_name: String,
    dynamodb_client: Client,
}

impl DynamoDbLinkStore {
    pub fn new(table_name: String, dynamodb_client: Client) -> Self {
        Self {
            table_name,
            dynamodb_client,
        }
    }
}

#[async_trait]
impl LinkStore for DynamoDbLinkStore {
    async fn get_url(&self, link_id: &str) -> Result<Option<String>, String> {
        let record = self
            .dynamodb_client
            .get_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(link_id.to_string()))
            .send()
            .await
            .map_err(|e| format!("Error fetching item: {:?}", e))?;

        // An item without a url attribute is treated the same as no item.
        Ok(record
            .item
            .and_then(|attributes| attributes.get("url").and_then(|v| v.as_s().cloned().ok())))
    }

    async fn store_link(&self, link_id: String, url: String) -> Result<ShortLink, String> {
        self.dynamodb_client
            .put_item()
            .table_name(&self.table_name)
            .item("id", AttributeValue::S(link_id.clone()))
            .item("url", AttributeValue::S(url.clone()))
            .send()
            .await
            .map(|_| ShortLink::new(link_id, url))
            .map_err(|e| format!("Error adding item: {:?}", e))
    }
}
