use std::fmt::Write as _;

use axum::http::StatusCode;

use crate::models::booking::Booking;
use crate::models::forms::{BookingForm, FieldErrors, RequestForm, TIME_CHOICES};
use crate::models::goal::Goal;
use crate::models::inquiry::Inquiry;
use crate::models::teacher::Teacher;
use crate::services::schedule::{self, WeekGrid, WEEKDAYS};
use crate::views::{escape, layout};

fn teacher_card(t: &Teacher) -> String {
    format!(
        r#"<article class="teacher-card">
  <img src="{picture}" alt="{name}" width="150">
  <h3><a href="/profiles/{id}/">{name}</a></h3>
  <p>Rating: {rating} &middot; {price} $/h</p>
  <p>{about}</p>
</article>"#,
        picture = escape(&t.picture),
        id = t.id,
        name = escape(&t.name),
        rating = t.rating,
        price = t.price,
        about = escape(&t.about),
    )
}

fn goal_links(goals: &[Goal]) -> String {
    let mut out = String::from("<ul class=\"goals\">\n");
    for g in goals {
        let _ = writeln!(
            out,
            r#"  <li><a href="/goals/{code}/">{name}</a></li>"#,
            code = escape(&g.code),
            name = escape(&g.name),
        );
    }
    out.push_str("</ul>");
    out
}

fn field_error(errors: &FieldErrors, field: &str) -> String {
    match errors.message(field) {
        Some(msg) => format!(r#"<p class="error">{}</p>"#, escape(msg)),
        None => String::new(),
    }
}

pub fn index(teachers: &[Teacher], goals: &[Goal]) -> String {
    let mut body = String::from("<h1>Our teachers</h1>\n<h2>Pick a goal</h2>\n");
    body.push_str(&goal_links(goals));
    body.push_str("\n<section class=\"teachers\">\n");
    for t in teachers {
        body.push_str(&teacher_card(t));
        body.push('\n');
    }
    body.push_str("</section>");
    layout("Home", &body)
}

pub fn goal(goal: &Goal, teachers: &[Teacher]) -> String {
    let mut body = format!("<h1>Teachers: {}</h1>\n", escape(&goal.name));
    if teachers.is_empty() {
        body.push_str("<p>No teachers for this goal yet.</p>");
    } else {
        body.push_str("<section class=\"teachers\">\n");
        for t in teachers {
            body.push_str(&teacher_card(t));
            body.push('\n');
        }
        body.push_str("</section>");
    }
    layout(&goal.name, &body)
}

pub fn profile(teacher: &Teacher, grid: &WeekGrid, goals: &[Goal]) -> String {
    let mut body = format!(
        r#"<article class="profile">
  <img src="{picture}" alt="{name}" width="200">
  <h1>{name}</h1>
  <p>Rating: {rating} &middot; {price} $/h</p>
  <p>{about}</p>
</article>
"#,
        picture = escape(&teacher.picture),
        name = escape(&teacher.name),
        rating = teacher.rating,
        price = teacher.price,
        about = escape(&teacher.about),
    );
    if !goals.is_empty() {
        body.push_str("<h2>Teaches for</h2>\n");
        body.push_str(&goal_links(goals));
        body.push('\n');
    }
    body.push_str("<h2>Free slots</h2>\n");
    for (day, label) in WEEKDAYS {
        let Some(slots) = grid.get(day) else { continue };
        let _ = writeln!(body, "<h3>{label}</h3>\n<ul class=\"slots\">");
        let mut times: Vec<&str> = slots.keys().map(String::as_str).collect();
        times.sort_by_key(|t| schedule::slot_sort_key(t));
        for time in times {
            if schedule::is_free(grid, day, time) {
                let _ = writeln!(
                    body,
                    r#"  <li><a href="/booking/{id}/{day}/{time}/">{time}</a></li>"#,
                    id = teacher.id,
                    day = day,
                    time = escape(time),
                );
            } else {
                let _ = writeln!(body, r#"  <li class="taken">{}</li>"#, escape(time));
            }
        }
        body.push_str("</ul>\n");
    }
    layout(&teacher.name, &body)
}

pub fn booking_form(
    teacher: &Teacher,
    day: &str,
    day_label: &str,
    time: &str,
    form: &BookingForm,
    errors: &FieldErrors,
) -> String {
    let body = format!(
        r#"<h1>Book a lesson</h1>
<p>{teacher_name}, {day_label} at {time}</p>
<form method="post" action="/booking/{id}/{day}/{time}/">
  <input type="hidden" name="client_weekday" value="{day}">
  <input type="hidden" name="client_time" value="{time}">
  <input type="hidden" name="client_teacher" value="{id}">
  <label>Your name
    <input type="text" name="client_name" value="{name_value}">
  </label>
  {name_error}
  <label>Your phone
    <input type="text" name="client_phone" value="{phone_value}">
  </label>
  {phone_error}
  <button type="submit">Book</button>
</form>"#,
        teacher_name = escape(&teacher.name),
        day_label = escape(day_label),
        id = teacher.id,
        day = escape(day),
        time = escape(time),
        name_value = escape(&form.client_name),
        phone_value = escape(&form.client_phone),
        name_error = field_error(errors, "client_name"),
        phone_error = field_error(errors, "client_phone"),
    );
    layout("Book a lesson", &body)
}

pub fn booking_done(teacher: &Teacher, booking: &Booking, day_label: &str) -> String {
    let body = format!(
        r#"<h1>Lesson booked</h1>
<p>{day_label}, {time} with {teacher_name}</p>
<p>We will call you back: {client_name}, {client_phone}</p>"#,
        day_label = escape(day_label),
        time = escape(&booking.time),
        teacher_name = escape(&teacher.name),
        client_name = escape(&booking.client_name),
        client_phone = escape(&booking.client_phone),
    );
    layout("Lesson booked", &body)
}

pub fn request_form(goals: &[Goal], form: &RequestForm, errors: &FieldErrors) -> String {
    let mut goal_radios = String::new();
    for g in goals {
        let checked = if form.goal == g.code { " checked" } else { "" };
        let _ = writeln!(
            goal_radios,
            r#"  <label><input type="radio" name="goal" value="{code}"{checked}> {name}</label>"#,
            code = escape(&g.code),
            checked = checked,
            name = escape(&g.name),
        );
    }
    let mut time_radios = String::new();
    for choice in TIME_CHOICES {
        let checked = if form.time == choice { " checked" } else { "" };
        let _ = writeln!(
            time_radios,
            r#"  <label><input type="radio" name="time" value="{choice}"{checked}> {choice} hours per week</label>"#,
            choice = choice,
            checked = checked,
        );
    }
    let body = format!(
        r#"<h1>Request a teacher</h1>
<form method="post" action="/request/">
  <fieldset>
    <legend>Your goal</legend>
{goal_radios}  </fieldset>
  {goal_error}
  <fieldset>
    <legend>Time you can spend</legend>
{time_radios}  </fieldset>
  {time_error}
  <label>Your name
    <input type="text" name="client_name" value="{name_value}">
  </label>
  {name_error}
  <label>Your phone
    <input type="text" name="client_phone" value="{phone_value}">
  </label>
  {phone_error}
  <button type="submit">Find me a teacher</button>
</form>"#,
        goal_radios = goal_radios,
        time_radios = time_radios,
        goal_error = field_error(errors, "goal"),
        time_error = field_error(errors, "time"),
        name_value = escape(&form.client_name),
        phone_value = escape(&form.client_phone),
        name_error = field_error(errors, "client_name"),
        phone_error = field_error(errors, "client_phone"),
    );
    layout("Request a teacher", &body)
}

pub fn request_done(goal: &Goal, inquiry: &Inquiry) -> String {
    let body = format!(
        r#"<h1>Request received</h1>
<p>Goal: {goal_name}</p>
<p>Time budget: {time} hours per week</p>
<p>We will call you back: {client_name}, {client_phone}</p>"#,
        goal_name = escape(&goal.name),
        time = escape(&inquiry.time),
        client_name = escape(&inquiry.client_name),
        client_phone = escape(&inquiry.client_phone),
    );
    layout("Request received", &body)
}

pub fn error_page(status: StatusCode) -> String {
    let (title, message) = if status == StatusCode::NOT_FOUND {
        ("Page not found", "Nothing here. Try starting from the homepage.")
    } else {
        ("Something went wrong", "We are on it. Please try again later.")
    };
    let body = format!(
        "<h1>{title}</h1>\n<p>{message}</p>\n<p><a href=\"/\">Back to the homepage</a></p>"
    );
    layout(title, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::schedule::decode;
    use chrono::Utc;

    fn teacher() -> Teacher {
        Teacher {
            id: 1,
            name: "Ann O'Neil".into(),
            about: "Speaks <fast>".into(),
            rating: 4.5,
            picture: "https://example.com/p/1.jpg".into(),
            price: 30,
            free: r#"{"mon": {"8:00": true, "10:00": false}}"#.into(),
        }
    }

    #[test]
    fn profile_links_free_slots_only() {
        let t = teacher();
        let grid = decode(&t.free).unwrap();
        let page = profile(&t, &grid, &[]);
        assert!(page.contains(r#"href="/booking/1/mon/8:00/""#));
        assert!(!page.contains(r#"href="/booking/1/mon/10:00/""#));
        assert!(page.contains(r#"<li class="taken">10:00</li>"#));
    }

    #[test]
    fn profile_escapes_teacher_text() {
        let t = teacher();
        let grid = decode(&t.free).unwrap();
        let page = profile(&t, &grid, &[]);
        assert!(page.contains("Ann O&#39;Neil"));
        assert!(page.contains("Speaks &lt;fast&gt;"));
    }

    #[test]
    fn booking_form_carries_the_slot_in_hidden_fields() {
        let t = teacher();
        let page = booking_form(
            &t,
            "mon",
            "Monday",
            "8:00",
            &BookingForm::default(),
            &FieldErrors::default(),
        );
        assert!(page.contains(r#"name="client_weekday" value="mon""#));
        assert!(page.contains(r#"name="client_time" value="8:00""#));
        assert!(page.contains(r#"name="client_teacher" value="1""#));
    }

    #[test]
    fn booking_form_renders_field_errors_and_keeps_input() {
        let t = teacher();
        let form = BookingForm {
            client_name: "Bob".into(),
            ..BookingForm::default()
        };
        let errors = form.validate();
        let page = booking_form(&t, "mon", "Monday", "8:00", &form, &errors);
        assert!(page.contains("Please enter your phone number"));
        assert!(page.contains(r#"name="client_name" value="Bob""#));
    }

    #[test]
    fn request_form_checks_the_submitted_choices() {
        let goals = vec![Goal { id: 1, code: "study".into(), name: "For study".into() }];
        let form = RequestForm {
            goal: "study".into(),
            time: "3-5".into(),
            ..RequestForm::default()
        };
        let page = request_form(&goals, &form, &FieldErrors::default());
        assert!(page.contains(r#"value="study" checked"#));
        assert!(page.contains(r#"value="3-5" checked"#));
        assert!(page.contains(r#"value="1-2""#));
    }

    #[test]
    fn request_done_shows_the_resolved_goal() {
        let goal = Goal { id: 1, code: "study".into(), name: "For study".into() };
        let inquiry = Inquiry {
            id: 1,
            time: "3-5".into(),
            client_name: "A".into(),
            client_phone: "123".into(),
            goal_id: 1,
            created_at: Utc::now(),
        };
        let page = request_done(&goal, &inquiry);
        assert!(page.contains("For study"));
        assert!(page.contains("3-5 hours per week"));
    }

    #[test]
    fn error_pages_differ_by_status() {
        assert!(error_page(StatusCode::NOT_FOUND).contains("Page not found"));
        assert!(error_page(StatusCode::INTERNAL_SERVER_ERROR).contains("Something went wrong"));
    }
}
