use std::collections::HashMap;
use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::{get, post, web, App, HttpResponse, HttpServer, Responder};

use ngram_tree_core::{
	build_forest_with, render_forest_html, render_forest_outline, NgramError, Stopwords, TreeOptions,
	WordTokenizer,
};
use serde::Deserialize;

/// Address used when `NGRAM_TREE_ADDR` is not set.
const DEFAULT_ADDR: &str = "127.0.0.1:5000";

/// Struct representing the JSON body of the `/v1/tree` endpoint
#[derive(Deserialize)]
struct TreeRequest {
	text: String,
	max_length: Option<usize>,
	stopwords: Option<Vec<String>>,
	language: Option<String>, // built-in stopword list, merged with `stopwords`
	lowercase: Option<bool>,
	format: Option<String>, // outline (default), html or json
	marker: Option<String>,
}

/// Rendering returned by `/v1/tree`
#[derive(Debug, PartialEq)]
enum Format {
	Outline,
	Html,
	Json,
}

impl TreeRequest {
	/// Determines the rendering requested by the client.
	fn format(&self) -> Result<Format, String> {
		match self.format.as_deref().map(str::to_lowercase).as_deref() {
			None | Some("outline") => Ok(Format::Outline),
			Some("html") => Ok(Format::Html),
			Some("json") => Ok(Format::Json),
			Some(other) => Err(format!("Format must be 'outline', 'html' or 'json', got '{other}'")),
		}
	}
}

/// Built-in stopword lists, loaded once per language.
struct SharedData {
	stopwords: HashMap<String, Stopwords>,
}

impl SharedData {
	fn language_stopwords(&mut self, language: &str) -> Stopwords {
		self.stopwords
			.entry(language.to_lowercase())
			.or_insert_with(|| Stopwords::for_language(language))
			.clone()
	}
}

/// HTTP POST endpoint `/v1/tree`
///
/// Builds the n-gram frequency forest of the posted text and returns it
/// as outline text, an HTML list or JSON.
#[post("/v1/tree")]
async fn post_tree(
	data: web::Data<Mutex<SharedData>>,
	request: web::Json<TreeRequest>,
) -> impl Responder {
	let format = match request.format() {
		Ok(f) => f,
		Err(e) => return HttpResponse::BadRequest().body(e),
	};

	let mut stopwords = match &request.language {
		Some(language) => match data.lock() {
			Ok(mut shared_data) => shared_data.language_stopwords(language),
			Err(_) => return HttpResponse::InternalServerError().body("Stopword cache lock failed"),
		},
		None => Stopwords::empty(),
	};
	if let Some(words) = &request.stopwords {
		stopwords.extend(words.iter().map(String::as_str));
	}

	let mut options = TreeOptions::default();
	options.stopwords = stopwords;
	if let Some(max_length) = request.max_length {
		if let Err(NgramError::InvalidArgument(e)) = options.set_max_length(max_length) {
			return HttpResponse::BadRequest().body(e);
		}
	}

	let tokenizer = WordTokenizer::new().with_lowercase(request.lowercase.unwrap_or(false));
	let forest = match build_forest_with(&tokenizer, &request.text, &options) {
		Ok(forest) => forest,
		Err(NgramError::InvalidArgument(e)) => return HttpResponse::BadRequest().body(e),
	};
	log::info!("Built {} trees from {} bytes of text", forest.len(), request.text.len());

	match format {
		Format::Outline => {
			let marker = request.marker.as_deref().unwrap_or("* ");
			HttpResponse::Ok()
				.content_type("text/plain; charset=utf-8")
				.body(render_forest_outline(&forest, marker))
		}
		Format::Html => HttpResponse::Ok()
			.content_type("text/html; charset=utf-8")
			.body(render_forest_html(&forest)),
		Format::Json => HttpResponse::Ok().json(&forest),
	}
}

#[get("/v1/health")]
async fn get_health() -> impl Responder {
	HttpResponse::Ok().body("ok")
}

/// Main entry point for the server.
///
/// Starts an Actix-web HTTP server exposing the tree endpoint.
///
/// # Notes
/// - The server binds to `NGRAM_TREE_ADDR`, 127.0.0.1:5000 by default.
/// - `RUST_LOG` controls log verbosity.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init();

	let shared_data = SharedData { stopwords: HashMap::new() };
	let shared_data = web::Data::new(Mutex::new(shared_data));

	let addr = std::env::var("NGRAM_TREE_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_owned());
	log::info!("Listening on {addr}");

	HttpServer::new(move || {
		App::new()
			.wrap(Cors::permissive())
			.app_data(shared_data.clone())
			.service(post_tree)
			.service(get_health)
	})
	.bind(addr)?
	.run()
	.await
}
