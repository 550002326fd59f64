mod config;

use std::io;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{get, post, web, App, HttpResponse, HttpServer, Responder};
use clap::Parser;
use log::{error, info, warn};
use serde::Deserialize;

use config::Config;
use kw_gen_core::error::KeywordError;
use kw_gen_core::export::ExportFormat;
use kw_gen_core::model::generator::KeywordGenerator;
use kw_gen_core::model::request::{parse_count, GenerationRequest, DEFAULT_COUNT};
use kw_gen_core::model::template_table::TemplateTable;

/// Struct representing query parameters for the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	topic: Option<String>,
	description: Option<String>,
	count: Option<String> // parsed by `parse_count`, defaults to 20
}

/// Body of the `/v1/export` endpoint
#[derive(Deserialize)]
struct ExportBody {
	format: ExportFormat,
	keywords: Vec<String>
}

impl GenerateParams {
	/// Validates the query into a generation request.
	fn request(&self) -> Result<GenerationRequest, KeywordError> {
		let count = match &self.count {
			Some(c) => parse_count(c)?,
			None => DEFAULT_COUNT,
		};
		GenerationRequest::new(
			self.topic.as_deref().unwrap_or_default(),
			self.description.as_deref().unwrap_or_default(),
			count,
		)
	}
}

/// Maps a core error to an HTTP response.
///
/// Input problems are reported as `400`, anything else as `500`.
fn error_response(e: &KeywordError) -> HttpResponse {
	if e.is_user_error() {
		warn!("Rejected request: {e}");
		HttpResponse::BadRequest().body(e.to_string())
	} else {
		error!("Request failed: {e}");
		HttpResponse::InternalServerError().body(e.to_string())
	}
}

/// HTTP GET endpoint `/v1/generate`
///
/// Generates keywords for `topic`, `description` and `count` and returns
/// them with their statistics as JSON.
#[get("/v1/generate")]
async fn get_generated(data: web::Data<KeywordGenerator>, query: web::Query<GenerateParams>) -> impl Responder {
	let request = match query.request() {
		Ok(r) => r,
		Err(e) => return error_response(&e)
	};

	let result = data.generate_with_stats(&request, &mut rand::rng());
	HttpResponse::Ok().json(result)
}

/// HTTP GET endpoint `/v1/categories`
///
/// Lists the template categories, one per line, in lookup order.
#[get("/v1/categories")]
async fn get_categories(data: web::Data<KeywordGenerator>) -> impl Responder {
	HttpResponse::Ok().body(data.table().categories().collect::<Vec<_>>().join("\n"))
}

/// HTTP POST endpoint `/v1/export`
///
/// Renders the posted keywords as a downloadable CSV or TXT file.
#[post("/v1/export")]
async fn post_export(body: web::Json<ExportBody>) -> impl Responder {
	let format = body.format;
	match format.render(&body.keywords) {
		Ok(contents) => {
			info!("Exported {} keywords as {format}", body.keywords.len());
			HttpResponse::Ok()
				.content_type(format.mime_type())
				.insert_header(("Content-Disposition", format!("attachment; filename=\"{}\"", format.filename())))
				.body(contents)
		}
		Err(e) => error_response(&e),
	}
}

/// Registers every endpoint.
fn routes(cfg: &mut web::ServiceConfig) {
	cfg.service(get_generated)
		.service(get_categories)
		.service(post_export);
}

/// Main entry point for the server.
///
/// Loads the template table (built-in or `--templates`), shares one
/// read-only generator across workers and starts an Actix-web HTTP server.
#[actix_web::main]
async fn main() -> io::Result<()> {
	let config = Config::parse();

	env_logger::Builder::from_default_env()
		.filter_level(config.log_level.parse().unwrap_or(log::LevelFilter::Info))
		.init();

	let table = match &config.templates {
		Some(path) => TemplateTable::load(path).map_err(|e| {
			error!("Failed to load templates from {}: {e}", path.display());
			io::Error::other(e.to_string())
		})?,
		None => TemplateTable::default(),
	};
	info!("Using {} template categories", table.len());

	let generator = web::Data::new(KeywordGenerator::new(table));

	info!("Listening on {}:{}", config.host, config.port);
	HttpServer::new(move || {
		App::new()
			.wrap(Logger::default())
			.wrap(Cors::permissive())
			.app_data(generator.clone())
			.configure(routes)
	})
		.bind((config.host.as_str(), config.port))?
		.run()
		.await
}
