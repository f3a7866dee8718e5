//! The `campaigns` resource.

use serde::Deserialize;

use crate::client::Client;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::Campaign;

#[derive(Deserialize)]
struct ListCampaignsResponse {
    campaigns: Vec<Campaign>,
}

#[derive(Deserialize)]
struct SingleCampaignResponse {
    campaign: Campaign,
}

/// Operations on `/campaigns`.
#[derive(Debug, Clone, Copy)]
pub struct CampaignsService<'a> {
    client: &'a Client,
}

impl<'a> CampaignsService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// All campaigns, in the order the server returns them.
    pub fn list(&self) -> Result<Vec<Campaign>, ApiError> {
        let response = self.client.execute(&self.build_list())?;
        self.parse_list(response)
    }

    pub fn retrieve(&self, campaign_id: &str) -> Result<Campaign, ApiError> {
        let response = self.client.execute(&self.build_retrieve(campaign_id))?;
        self.parse_retrieve(response)
    }

    pub fn build_list(&self) -> HttpRequest {
        self.client.request(HttpMethod::Get, "/campaigns", None)
    }

    pub fn build_retrieve(&self, campaign_id: &str) -> HttpRequest {
        let path = format!("/campaigns/{}", campaign_id.trim());
        self.client.request(HttpMethod::Get, &path, None)
    }

    pub fn parse_list(&self, response: HttpResponse) -> Result<Vec<Campaign>, ApiError> {
        response.expect_status(&[200])?;
        let envelope: ListCampaignsResponse = response.decode("campaigns list")?;
        Ok(envelope.campaigns)
    }

    pub fn parse_retrieve(&self, response: HttpResponse) -> Result<Campaign, ApiError> {
        response.expect_status(&[200])?;
        let envelope: SingleCampaignResponse = response.decode("single campaign")?;
        Ok(envelope.campaign)
    }
}
