use crate::core::gateway::{GatewayRequest, GatewayResponse, CONTENT_TYPE, LOCATION};
use crate::core::repository::Repository;
use crate::domain::model::Employee;
use crate::domain::ports::{Handler, ItemStore};
use crate::utils::error::{ApiError, Result};
use crate::utils::validation::{validate_employee_id, validate_required_field};
use async_trait::async_trait;
use http::StatusCode;

pub const EMPLOYEE_ID_PARAM: &str = "employeeid";

/// `GET /employees?employeeid=...` and `POST /employees`.
pub struct EmployeeHandler<S: ItemStore> {
    employees: Repository<Employee, S>,
}

impl<S: ItemStore> EmployeeHandler<S> {
    pub fn new(employees: Repository<Employee, S>) -> Self {
        Self { employees }
    }

    async fn show(&self, request: &GatewayRequest) -> Result<GatewayResponse> {
        let employee_id = request.query_parameter(EMPLOYEE_ID_PARAM).unwrap_or_default();
        validate_employee_id(EMPLOYEE_ID_PARAM, employee_id)?;

        let employee = self
            .employees
            .fetch(employee_id)
            .await?
            .ok_or_else(|| ApiError::NotFound {
                table: self.employees.table().to_string(),
                key: employee_id.to_string(),
            })?;

        GatewayResponse::json(StatusCode::OK, &employee)
    }

    async fn create(&self, request: &GatewayRequest) -> Result<GatewayResponse> {
        // Checked before the body is touched.
        if !request.has_json_body() {
            return Err(ApiError::NotAcceptable {
                content_type: request.header(CONTENT_TYPE).map(str::to_string),
            });
        }

        let body = request.body_bytes()?;
        // A literal `null` body leaves every field empty for validation to reject.
        let employee: Employee = serde_json::from_slice::<Option<Employee>>(&body)
            .map_err(|e| ApiError::UnprocessableBody {
                reason: e.to_string(),
            })?
            .unwrap_or_default();

        validate_employee_id(EMPLOYEE_ID_PARAM, &employee.employee_id)?;
        validate_required_field("firstname", &employee.first_name)?;
        validate_required_field("lastname", &employee.last_name)?;
        validate_required_field("employeetype", &employee.employee_type)?;

        self.employees.insert(&employee).await?;
        tracing::info!("Created employee {}", employee.employee_id);

        let location = format!("/employees?{}={}", EMPLOYEE_ID_PARAM, employee.employee_id);
        Ok(GatewayResponse::new(StatusCode::CREATED).with_header(LOCATION, &location))
    }
}

#[async_trait]
impl<S: ItemStore> Handler for EmployeeHandler<S> {
    async fn handle(&self, request: GatewayRequest) -> GatewayResponse {
        tracing::info!(
            method = %request.http_method,
            path = request.path.as_deref().unwrap_or("/employees"),
            "Handling employee request"
        );

        let result = match request.http_method.as_str() {
            "GET" => self.show(&request).await,
            "POST" => self.create(&request).await,
            other => Err(ApiError::MethodNotAllowed {
                method: other.to_string(),
            }),
        };

        result.unwrap_or_else(GatewayResponse::from)
    }
}
