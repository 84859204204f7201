//! GraphQL operations against the registry schema.
//!
//! The registry publishes no introspectable schema artifact, so each
//! operation implements [`GraphQLQuery`] by hand: a marker struct, a module
//! holding the document plus its `Variables` and `ResponseData` types, and a
//! `build_query` that assembles the [`QueryBody`]. The shapes mirror what
//! `graphql-client` codegen would emit, so the client's `execute` method
//! stays generic over `Q: GraphQLQuery`.

use graphql_client::{GraphQLQuery, QueryBody};

/// Stitches the shared company selection onto an operation document.
macro_rules! with_company_fields {
    ($operation:literal) => {
        concat!(
            $operation,
            "\n\nfragment CompanyFields on Company {\n",
            "  id\n",
            "  legalName\n",
            "  stateOfIncorporation\n",
            "  industry\n",
            "  totalNumberOfEmployees\n",
            "  numberOfFullTimeEmployees\n",
            "  numberOfPartTimeEmployees\n",
            "  website\n",
            "  linkedInCompanyPage\n",
            "  facebookCompanyPage\n",
            "  otherInformation\n",
            "  primaryContactPerson {\n",
            "    firstName\n",
            "    lastName\n",
            "    email\n",
            "    phone\n",
            "  }\n",
            "  logoS3Key\n",
            "  phone\n",
            "  fax\n",
            "  email\n",
            "  isMailingAddressDifferentFromRegisteredAddress\n",
            "  registeredAddress {\n",
            "    street\n",
            "    city\n",
            "    state\n",
            "    country\n",
            "    zipCode\n",
            "  }\n",
            "  mailingAddress {\n",
            "    street\n",
            "    city\n",
            "    state\n",
            "    country\n",
            "    zipCode\n",
            "  }\n",
            "}\n"
        )
    };
}

// ==================== GetCompany ====================

pub struct GetCompany;

pub mod get_company {
    use corpdir_core::CompanyRecord;
    use serde::{Deserialize, Serialize};

    pub const OPERATION_NAME: &str = "GetCompany";
    pub const QUERY: &str = with_company_fields!(
        "query GetCompany($getCompanyId: String) {\n  getCompany(id: $getCompanyId) {\n    ...CompanyFields\n  }\n}"
    );

    #[derive(Debug, Serialize)]
    pub struct Variables {
        #[serde(rename = "getCompanyId")]
        pub id: String,
    }

    #[derive(Debug, Deserialize)]
    pub struct ResponseData {
        #[serde(rename = "getCompany")]
        pub get_company: Option<CompanyRecord>,
    }
}

impl GraphQLQuery for GetCompany {
    type Variables = get_company::Variables;
    type ResponseData = get_company::ResponseData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: get_company::QUERY,
            operation_name: get_company::OPERATION_NAME,
        }
    }
}

// ==================== CreateCompany ====================

pub struct CreateCompany;

pub mod create_company {
    use corpdir_core::{CompanyInput, CompanyRecord};
    use serde::{Deserialize, Serialize};

    pub const OPERATION_NAME: &str = "CreateCompany";
    pub const QUERY: &str = with_company_fields!(
        "mutation CreateCompany($input: UpdateCompanyInput!) {\n  createCompany(input: $input) {\n    company {\n      ...CompanyFields\n    }\n  }\n}"
    );

    #[derive(Debug, Serialize)]
    pub struct Variables {
        pub input: CompanyInput,
    }

    #[derive(Debug, Deserialize)]
    pub struct CompanyPayload {
        pub company: Option<CompanyRecord>,
    }

    #[derive(Debug, Deserialize)]
    pub struct ResponseData {
        #[serde(rename = "createCompany")]
        pub create_company: Option<CompanyPayload>,
    }
}

impl GraphQLQuery for CreateCompany {
    type Variables = create_company::Variables;
    type ResponseData = create_company::ResponseData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: create_company::QUERY,
            operation_name: create_company::OPERATION_NAME,
        }
    }
}

// ==================== UpdateCompany ====================

pub struct UpdateCompany;

pub mod update_company {
    use corpdir_core::{CompanyInput, CompanyRecord};
    use serde::{Deserialize, Serialize};

    pub const OPERATION_NAME: &str = "UpdateCompany";
    pub const QUERY: &str = with_company_fields!(
        "mutation UpdateCompany($companyId: ID!, $input: UpdateCompanyInput!) {\n  updateCompany(companyId: $companyId, input: $input) {\n    company {\n      ...CompanyFields\n    }\n  }\n}"
    );

    #[derive(Debug, Serialize)]
    pub struct Variables {
        #[serde(rename = "companyId")]
        pub company_id: String,
        pub input: CompanyInput,
    }

    #[derive(Debug, Deserialize)]
    pub struct CompanyPayload {
        pub company: Option<CompanyRecord>,
    }

    #[derive(Debug, Deserialize)]
    pub struct ResponseData {
        #[serde(rename = "updateCompany")]
        pub update_company: Option<CompanyPayload>,
    }
}

impl GraphQLQuery for UpdateCompany {
    type Variables = update_company::Variables;
    type ResponseData = update_company::ResponseData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: update_company::QUERY,
            operation_name: update_company::OPERATION_NAME,
        }
    }
}

// ==================== GetSignedUploadUrl ====================

pub struct GetSignedUploadUrl;

pub mod get_signed_upload_url {
    use serde::{Deserialize, Serialize};

    use crate::api::SignedUrl;

    pub const OPERATION_NAME: &str = "GetSignedUploadUrl";
    pub const QUERY: &str = "query GetSignedUploadUrl($input: SignedFileUploadInput) {\n  getSignedUploadUrl(input: $input) {\n    url\n    key\n  }\n}\n";

    #[derive(Debug, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SignedFileUploadInput {
        pub file_name: String,
        pub content_type: String,
    }

    #[derive(Debug, Serialize)]
    pub struct Variables {
        pub input: SignedFileUploadInput,
    }

    #[derive(Debug, Deserialize)]
    pub struct ResponseData {
        #[serde(rename = "getSignedUploadUrl")]
        pub get_signed_upload_url: Option<SignedUrl>,
    }
}

impl GraphQLQuery for GetSignedUploadUrl {
    type Variables = get_signed_upload_url::Variables;
    type ResponseData = get_signed_upload_url::ResponseData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: get_signed_upload_url::QUERY,
            operation_name: get_signed_upload_url::OPERATION_NAME,
        }
    }
}

// ==================== GetSignedDownloadUrl ====================

pub struct GetSignedDownloadUrl;

pub mod get_signed_download_url {
    use serde::{Deserialize, Serialize};

    use crate::api::SignedUrl;

    pub const OPERATION_NAME: &str = "GetSignedDownloadUrl";
    pub const QUERY: &str = "query GetSignedDownloadUrl($s3Key: String) {\n  getSignedDownloadUrl(s3Key: $s3Key) {\n    url\n    key\n  }\n}\n";

    #[derive(Debug, Serialize)]
    pub struct Variables {
        #[serde(rename = "s3Key")]
        pub s3_key: String,
    }

    #[derive(Debug, Deserialize)]
    pub struct ResponseData {
        #[serde(rename = "getSignedDownloadUrl")]
        pub get_signed_download_url: Option<SignedUrl>,
    }
}

impl GraphQLQuery for GetSignedDownloadUrl {
    type Variables = get_signed_download_url::Variables;
    type ResponseData = get_signed_download_url::ResponseData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: get_signed_download_url::QUERY,
            operation_name: get_signed_download_url::OPERATION_NAME,
        }
    }
}
