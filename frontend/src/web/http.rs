//! HTTP 传输层
//!
//! 使用 `web_sys::fetch` 实现核心库的 `HttpClient`。
//! 超时通过 `AbortController` + `gloo_timers` 实现：到期后中止请求并映射为 `ApiError::Timeout`。

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use placement_tracker::{ApiError, HttpClient, HttpRequest, HttpResponse};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, Headers, Request, RequestInit, Response};

fn build_error(context: &str, e: JsValue) -> ApiError {
    ApiError::Build(format!("{}: {:?}", context, e))
}

/// 浏览器 fetch 客户端
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchHttpClient;

impl FetchHttpClient {
    fn transport_error(timed_out: &Cell<bool>, e: JsValue) -> ApiError {
        if timed_out.get() {
            ApiError::Timeout
        } else {
            ApiError::Network(format!("{:?}", e))
        }
    }
}

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchHttpClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        let headers = Headers::new().map_err(|e| build_error("创建 Headers 失败", e))?;
        for (key, value) in &req.headers {
            headers
                .set(key, value)
                .map_err(|e| build_error("设置 Header 失败", e))?;
        }

        let controller =
            AbortController::new().map_err(|e| build_error("创建 AbortController 失败", e))?;

        let opts = RequestInit::new();
        opts.set_method(req.method.as_str());
        opts.set_headers(&headers.into());
        opts.set_signal(Some(&controller.signal()));
        if let Some(body) = &req.body {
            opts.set_body(&JsValue::from_str(body));
        }

        let request = Request::new_with_str_and_init(&req.url, &opts)
            .map_err(|e| build_error("创建 Request 失败", e))?;

        let window = web_sys::window()
            .ok_or_else(|| ApiError::Network("无法获取 window 对象".to_string()))?;

        // 定时器在函数返回时随 `_deadline` 一起被 drop，从而取消
        let timed_out = Rc::new(Cell::new(false));
        let _deadline = req.timeout.map(|timeout| {
            let timed_out = timed_out.clone();
            let controller = controller.clone();
            Timeout::new(timeout.as_millis() as u32, move || {
                timed_out.set(true);
                controller.abort();
            })
        });

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| Self::transport_error(&timed_out, e))?;

        let response: Response = resp_value
            .dyn_into()
            .map_err(|e| ApiError::Decode(format!("Response 类型转换失败: {:?}", e)))?;

        let status = response.status();

        let promise = response
            .text()
            .map_err(|e| ApiError::Decode(format!("{:?}", e)))?;
        let text = JsFuture::from(promise)
            .await
            .map_err(|e| Self::transport_error(&timed_out, e))?;

        Ok(HttpResponse {
            status,
            body: text.as_string().unwrap_or_default(),
        })
    }
}
