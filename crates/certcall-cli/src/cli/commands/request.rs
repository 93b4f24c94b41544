//! `certcall get|post|put|delete|patch|request` - send one request.

use std::process::ExitCode;

use super::{emit, Context};
use crate::cli::args::{BodyArgs, RequestArgs, TargetArgs};

pub fn get(ctx: &Context, args: &TargetArgs) -> ExitCode {
    let ops = ctx.client.procedures();
    emit(&ops.http_get(Some(args.url.as_str()), Some(args.thumbprint.as_str())))
}

pub fn delete(ctx: &Context, args: &TargetArgs) -> ExitCode {
    let ops = ctx.client.procedures();
    emit(&ops.http_delete(Some(args.url.as_str()), Some(args.thumbprint.as_str())))
}

pub fn post(ctx: &Context, args: &BodyArgs) -> ExitCode {
    let ops = ctx.client.procedures();
    let (url, thumbprint, body, content_type) = parts(args);
    emit(&ops.http_post(url, thumbprint, body, content_type))
}

pub fn put(ctx: &Context, args: &BodyArgs) -> ExitCode {
    let ops = ctx.client.procedures();
    let (url, thumbprint, body, content_type) = parts(args);
    emit(&ops.http_put(url, thumbprint, body, content_type))
}

pub fn patch(ctx: &Context, args: &BodyArgs) -> ExitCode {
    let ops = ctx.client.procedures();
    let (url, thumbprint, body, content_type) = parts(args);
    emit(&ops.http_patch(url, thumbprint, body, content_type))
}

pub fn custom(ctx: &Context, args: &RequestArgs) -> ExitCode {
    let ops = ctx.client.procedures();
    emit(&ops.http_request_with_headers(
        Some(args.target.url.as_str()),
        Some(args.target.thumbprint.as_str()),
        Some(args.method.as_str()),
        args.body.as_deref(),
        args.content_type.as_deref(),
        args.headers.as_deref(),
    ))
}

type BodyParts<'a> = (Option<&'a str>, Option<&'a str>, Option<&'a str>, Option<&'a str>);

fn parts(args: &BodyArgs) -> BodyParts<'_> {
    (
        Some(args.target.url.as_str()),
        Some(args.target.thumbprint.as_str()),
        args.body.as_deref(),
        args.content_type.as_deref(),
    )
}
