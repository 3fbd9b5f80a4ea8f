//! Command implementations. Each writes its report to `out`.

use std::io::Write;

use banquet::{
    coupons::{Coupon, redeemable},
    dates::format_readable_date,
    fixtures::Fixture,
    templates::SubstitutionMap,
    text::{DEFAULT_TRUNCATE_LENGTH, truncate_text},
};
use jiff::civil::Date;
use tabled::{builder::Builder, settings::Style};
use tracing::{info, warn};

use crate::cli::CliError;

pub(super) fn info(fixture: &Fixture, out: &mut impl Write) -> Result<(), CliError> {
    let restaurant = fixture.restaurant();

    writeln!(out, "{}", restaurant.name)?;
    writeln!(out, "{}", restaurant.description)?;
    writeln!(out)?;
    writeln!(out, "Address:  {}", restaurant.address)?;
    writeln!(out, "Phone:    {}", restaurant.phone)?;
    writeln!(out, "Hours:    {}", restaurant.business_hours)?;
    writeln!(out, "Tags:     {}", restaurant.tags.join(", "))?;
    writeln!(
        out,
        "Rating:   {:.1} ({} reviews)",
        restaurant.rating, restaurant.review_count
    )?;

    Ok(())
}

pub(super) fn templates(fixture: &Fixture, out: &mut impl Write) -> Result<(), CliError> {
    let rows = fixture.templates().iter().map(|template| {
        let preview = template.body.split_whitespace().collect::<Vec<_>>().join(" ");

        [
            template.id.to_string(),
            template.title.clone(),
            template.placeholders().join(", "),
            truncate_text(&preview, DEFAULT_TRUNCATE_LENGTH).into_owned(),
        ]
    });

    write_table(out, ["ID", "Title", "Placeholders", "Preview"], rows)
}

pub(super) fn render(
    fixture: &Fixture,
    id: u32,
    assignments: Vec<(String, String)>,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let template = fixture.template(id)?;
    let values: SubstitutionMap = assignments.into_iter().collect();

    for name in template.missing(&values) {
        warn!(template = id, placeholder = name, "placeholder left unfilled");
    }

    writeln!(out, "{}", template.render(&values))?;

    Ok(())
}

pub(super) fn coupons(
    fixture: &Fixture,
    today: Date,
    redeemable_only: bool,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let listed: Vec<&Coupon> = if redeemable_only {
        redeemable(fixture.coupons(), today)?
    } else {
        fixture.coupons().iter().collect()
    };

    info!(%today, listed = listed.len(), "evaluating coupons");

    let rows = listed.into_iter().map(|coupon| coupon_row(coupon, today));

    write_table(
        out,
        [
            "ID",
            "Title",
            "Platform",
            "Code",
            "Discount",
            "Valid",
            "Status",
            "Published",
        ],
        rows,
    )
}

/// A malformed date is shown in the row rather than aborting the whole listing.
fn coupon_row(coupon: &Coupon, today: Date) -> [String; 8] {
    let (window, status) = match coupon.validity() {
        Ok(window) => (
            format!(
                "{} - {}",
                format_readable_date(window.from),
                format_readable_date(window.to)
            ),
            window.status(today).to_string(),
        ),
        Err(error) => {
            warn!(coupon = coupon.id, %error, "coupon has an invalid validity window");

            (
                format!("{} - {}", coupon.valid_from, coupon.valid_to),
                "invalid date".to_string(),
            )
        }
    };

    [
        coupon.id.to_string(),
        coupon.title.clone(),
        coupon.platform.clone(),
        coupon.code.clone(),
        coupon.discount.clone(),
        window,
        status,
        yes_no(coupon.published).to_string(),
    ]
}

pub(super) fn platforms(fixture: &Fixture, out: &mut impl Write) -> Result<(), CliError> {
    let rows = fixture.platforms().iter().map(|platform| {
        let status = if platform.connected {
            "connected"
        } else {
            "disconnected"
        };

        [
            platform.id.to_string(),
            platform.name.clone(),
            status.to_string(),
            platform.handle().unwrap_or("-").to_string(),
        ]
    });

    write_table(out, ["ID", "Platform", "Status", "Account"], rows)
}

pub(super) fn analytics(fixture: &Fixture, out: &mut impl Write) -> Result<(), CliError> {
    let analytics = fixture.analytics();
    let engagement = &analytics.social_engagement;
    let totals = analytics.content_totals();

    writeln!(out, "Followers:      {}", engagement.followers)?;
    writeln!(out, "Engagement:     {:.1}%", engagement.engagement)?;
    writeln!(out, "Weekly growth:  {:.1}%", engagement.weekly_growth)?;
    writeln!(out, "Top platform:   {}", engagement.top_platform)?;
    writeln!(
        out,
        "Content:        {} posts, {} likes, {} comments, {} shares",
        totals.posts, totals.likes, totals.comments, totals.shares
    )?;

    let weeks = analytics.content_performance.iter().map(|week| {
        [
            week.date.clone(),
            week.posts.to_string(),
            week.likes.to_string(),
            week.comments.to_string(),
            week.shares.to_string(),
            week.engagement_per_post()
                .map_or_else(|| "-".to_string(), |ratio| format!("{ratio:.1}")),
        ]
    });

    write_table(
        out,
        ["Week", "Posts", "Likes", "Comments", "Shares", "Per Post"],
        weeks,
    )?;

    let usage = analytics.coupon_usage.iter().map(|usage| {
        let title = fixture
            .coupon(usage.coupon_id)
            .map_or("<unknown>", |coupon| coupon.title.as_str());

        [
            usage.coupon_id.to_string(),
            title.to_string(),
            usage.redemptions.to_string(),
            usage.revenue.to_string(),
        ]
    });

    write_table(out, ["ID", "Coupon", "Redemptions", "Revenue"], usage)?;

    writeln!(
        out,
        "Total:          {} redemptions, {} revenue",
        analytics.total_redemptions(),
        analytics.total_revenue()
    )?;

    Ok(())
}

fn write_table<const N: usize>(
    out: &mut impl Write,
    header: [&str; N],
    rows: impl Iterator<Item = [String; N]>,
) -> Result<(), CliError> {
    let mut builder = Builder::default();

    builder.push_record(header);

    for row in rows {
        builder.push_record(row);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());

    writeln!(out, "{table}")?;

    Ok(())
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
