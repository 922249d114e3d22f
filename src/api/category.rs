//! Category Endpoints

use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::ApiClient;
use crate::error::ApiError;
use crate::models::Category;

#[derive(Serialize)]
struct CreateCategoryBody<'a> {
    title: &'a str,
}

#[derive(Serialize)]
struct UpdateCategoryBody<'a> {
    category_oid: &'a str,
    title: &'a str,
}

#[derive(Serialize)]
struct CategoryIdBody<'a> {
    category_oid: &'a str,
}

#[derive(Deserialize)]
struct CategoryList {
    categories: Vec<Category>,
}

impl ApiClient {
    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        let list: CategoryList = self.get_json("/category/get-all").await?;
        Ok(list.categories)
    }

    pub async fn create_category(&self, title: &str) -> Result<(), ApiError> {
        self.execute(Method::POST, "/category/create", &CreateCategoryBody { title })
            .await
    }

    pub async fn update_category(&self, category_oid: &str, title: &str) -> Result<(), ApiError> {
        let body = UpdateCategoryBody { category_oid, title };
        self.execute(Method::PATCH, "/category/update/", &body).await
    }

    pub async fn delete_category(&self, category_oid: &str) -> Result<(), ApiError> {
        self.execute(Method::DELETE, "/category/delete/", &CategoryIdBody { category_oid })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_list_categories() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/category/get-all"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "categories": [{"oid": "c1", "title": "Home"}, {"oid": "c2", "title": "Work"}]
            })))
            .mount(&server)
            .await;

        let categories = ApiClient::new(server.uri()).list_categories().await.unwrap();
        let titles: Vec<_> = categories.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Home", "Work"]);
    }

    #[tokio::test]
    async fn test_category_mutations() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/category/create"))
            .and(body_json(json!({"title": "Home"})))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PATCH"))
            .and(path("/category/update/"))
            .and(body_json(json!({"category_oid": "c1", "title": "House"})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/category/delete/"))
            .and(body_json(json!({"category_oid": "c1"})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        client.create_category("Home").await.unwrap();
        client.update_category("c1", "House").await.unwrap();
        client.delete_category("c1").await.unwrap();
    }

    #[tokio::test]
    async fn test_update_category_unauthorized() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/category/update/"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"detail": {"error": "token expired"}})),
            )
            .mount(&server)
            .await;

        let err = ApiClient::new(server.uri())
            .update_category("c1", "House")
            .await
            .unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), "token expired");
    }
}
