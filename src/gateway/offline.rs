//! Offline gateway: answers from the mentors' canned sayings.

use async_trait::async_trait;
use rand::seq::SliceRandom;

use crate::catalog;
use crate::error::GatewayError;

use super::ResponseGateway;

/// Replies with a random saying of the mentor behind the option code.
/// Out-of-range codes answer as the first mentor.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineGateway;

impl OfflineGateway {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ResponseGateway for OfflineGateway {
    fn name(&self) -> &str {
        "offline"
    }

    async fn respond(&self, _question: &str, mentor_option: u8) -> Result<String, GatewayError> {
        let mentors = catalog::mentors();
        let mentor = mentors
            .get(usize::from(mentor_option))
            .unwrap_or(&mentors[0]);
        let saying = catalog::sayings(mentor.id)
            .choose(&mut rand::thread_rng())
            .ok_or_else(|| GatewayError::Remote(format!("{} has nothing to say", mentor.name)))?;
        Ok(saying.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn answers_in_character() {
        let gw = OfflineGateway::new();
        for (option, mentor) in catalog::mentors().iter().enumerate() {
            let reply = gw.respond("anything", option as u8).await.unwrap();
            assert!(
                catalog::sayings(mentor.id).contains(&reply.as_str()),
                "{} answered out of character: {reply}",
                mentor.id
            );
        }
    }

    #[tokio::test]
    async fn out_of_range_option_answers_as_first_mentor() {
        let reply = OfflineGateway::new().respond("hi", 9).await.unwrap();
        assert!(catalog::sayings("musashi").contains(&reply.as_str()));
    }
}
