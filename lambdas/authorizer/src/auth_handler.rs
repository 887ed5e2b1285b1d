use aws_lambda_events::apigw::{
    ApiGatewayCustomAuthorizerPolicy, ApiGatewayCustomAuthorizerRequest,
    ApiGatewayCustomAuthorizerResponse,
};
use aws_lambda_events::iam::{IamPolicyEffect, IamPolicyStatement};
use lambda_runtime::{tracing, Error, LambdaEvent};
use shared::auth::{extract_bearer_token, TokenVerifier};
use std::collections::HashMap;

const POLICY_VERSION: &str = "2012-10-17";
const INVOKE_ACTION: &str = "execute-api:Invoke";

pub(crate) struct HandlerDeps<V: TokenVerifier> {
    pub token_verifier: V,
}

/// Token authorizer: verifies the bearer token and answers with a policy
/// scoped to the exact method ARN that was requested. All failures, from a
/// missing header to a bad signature, collapse into the same `Unauthorized`
/// error; API Gateway turns that into a deny.
pub(crate) async fn function_handler<V: TokenVerifier>(
    deps: &HandlerDeps<V>,
    event: LambdaEvent<ApiGatewayCustomAuthorizerRequest>,
) -> Result<ApiGatewayCustomAuthorizerResponse<HashMap<String, String>>, Error> {
    let request = event.payload;
    tracing::info!("Received token: {:?}", request.authorization_token);

    let token = request
        .authorization_token
        .as_deref()
        .and_then(extract_bearer_token)
        .ok_or_else(|| Error::from("Unauthorized"))?;

    let claims = match deps.token_verifier.verify(token) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::error!("Token verification failed: {}", e);
            return Err(Error::from("Unauthorized"));
        }
    };
    tracing::info!("Decoded token: {:?}", claims);

    let method_arn = request.method_arn.unwrap_or_default();
    let mut context = HashMap::new();
    context.insert("user".to_string(), serde_json::to_string(&claims)?);

    Ok(auth_response(claims.principal_id(), &method_arn, context))
}

fn auth_response(
    principal_id: String,
    method_arn: &str,
    context: HashMap<String, String>,
) -> ApiGatewayCustomAuthorizerResponse<HashMap<String, String>> {
    ApiGatewayCustomAuthorizerResponse {
        principal_id: Some(principal_id),
        policy_document: policy_document(IamPolicyEffect::Allow, method_arn),
        context,
        usage_identifier_key: None,
    }
}

fn policy_document(effect: IamPolicyEffect, method_arn: &str) -> ApiGatewayCustomAuthorizerPolicy {
    ApiGatewayCustomAuthorizerPolicy {
        version: Some(POLICY_VERSION.to_string()),
        statement: vec![IamPolicyStatement {
            action: vec![INVOKE_ACTION.to_string()],
            effect,
            resource: vec![method_arn.to_string()],
            ..Default::default()
        }],
    }
}
