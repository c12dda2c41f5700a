use iced::{widget::{button, column, horizontal_rule, horizontal_space, pick_list, row, text, text_input, Column, Container, Row, Scrollable}, Alignment, Element, Length};
use iced::widget::container::bordered_box;
use iced_aw::date_picker;
use crate::app::state::{ActiveForm, DatePickerOpen, DeleteTarget};
use crate::app::update::date_for_picker;
use crate::app::{App, Message};
use crate::filter::{visible, Choice};
use crate::form::{FormController, PaymentDraft, PaymentField};
use crate::listing::{format_currency, format_date, is_overdue, Badge, PaymentSummary, Tone};
use crate::model::{Payment, PaymentMethod, PaymentStatus};
use crate::screens::{badge, icon, icon_button, icon_button_content, labeled, modal, page_header, stat_card};

fn header_row<'a>() -> Row<'a, Message> {
    row![
        text("Student").width(Length::FillPortion(3)),
        text("Course").width(Length::FillPortion(2)),
        text("Amount").width(Length::FillPortion(1)),
        text("Due Date").width(Length::FillPortion(2)),
        text("Status").width(Length::FillPortion(2)),
        text("Payment").width(Length::FillPortion(2)),
        text("Actions").width(Length::FillPortion(2)),
    ]
    .spacing(10)
    .padding([0, 10])
}

fn payment_row<'a>(app: &'a App, payment: &'a Payment) -> Element<'a, Message> {
    let mut due = Column::new().spacing(2).push(text(format_date(Some(payment.due_date))).size(14));
    if is_overdue(payment, app.today()) {
        due = due.push(text("Overdue").size(12).color(Tone::Red.color()));
    }

    let method = column![
        text(payment.payment_method.map_or("N/A".to_string(), |m| m.to_string())).size(14),
        text(format!("Paid: {}", format_date(payment.paid_date))).size(12),
        text(payment.transaction_id.clone().unwrap_or_default()).size(12),
    ]
    .spacing(2);

    let mut actions = Row::new().spacing(2).align_y(Alignment::Center);
    if !payment.status.is_settled() {
        actions = actions.push(
            button(icon(app, "check"))
                .style(button::text)
                .on_press(Message::MarkAsPaid(payment.id)),
        );
    }
    actions = actions
        .push(button(icon(app, "pen")).style(button::text).on_press(Message::OpenPaymentForm(Some(payment.id))))
        .push(
            button(icon(app, "trash"))
                .style(button::text)
                .on_press(Message::RequestDelete(DeleteTarget::Payment(payment.id))),
        );

    Container::new(
        row![
            column![text(&payment.student_name).size(16), text(&payment.student_email).size(13)]
                .spacing(2)
                .width(Length::FillPortion(3)),
            text(&payment.course).size(14).width(Length::FillPortion(2)),
            text(format_currency(payment.amount)).size(16).width(Length::FillPortion(1)),
            Container::new(due).width(Length::FillPortion(2)),
            Container::new(badge(payment.status, payment.status.tone())).width(Length::FillPortion(2)),
            Container::new(method).width(Length::FillPortion(2)),
            Container::new(actions).width(Length::FillPortion(2)),
        ]
        .spacing(10)
        .align_y(Alignment::Center),
    )
    .padding(10)
    .style(move |_| bordered_box(&app.theme))
    .into()
}

fn payment_form<'a>(app: &'a App, form: &'a FormController<PaymentDraft>) -> Element<'a, Message> {
    let draft = form.draft();
    let today = app.today();
    let title = if form.is_editing() { "Edit Payment Record" } else { "Add Payment Record" };
    let submit_label = match (form.is_submitting(), form.is_editing()) {
        (true, _) => "Saving...",
        (false, true) => "Update Payment",
        (false, false) => "Add Payment",
    };

    let input = move |label: &'a str, field: PaymentField, value: &'a str| {
        labeled(
            label,
            text_input(label, value)
                .on_input(move |v| Message::PaymentFieldChanged(field, v))
                .padding(8),
            form.error(field.key()),
        )
        .width(Length::Fill)
    };

    let due_button = button(icon_button_content(icon(app, "calendar"), "Due Date")).on_press(Message::ChooseDueDate);
    let due_picker = date_picker(
        app.date_picker == DatePickerOpen::Due,
        date_for_picker(draft.due_date, today),
        due_button,
        Message::CancelDatePicker,
        Message::SubmitDueDate,
    );

    let paid_button = button(icon_button_content(icon(app, "calendar-check"), "Paid Date")).on_press(Message::ChoosePaidDate);
    let paid_picker = date_picker(
        app.date_picker == DatePickerOpen::Paid,
        date_for_picker(draft.paid_date, today),
        paid_button,
        Message::CancelDatePicker,
        Message::SubmitPaidDate,
    );

    let paid_required = draft.status == PaymentStatus::Paid;
    let method_label = if paid_required { "Payment Method *" } else { "Payment Method" };

    column![
        text(title).size(24),
        row![
            input("Student Name", PaymentField::StudentName, &draft.student_name),
            input("Student Email", PaymentField::StudentEmail, &draft.student_email),
        ]
        .spacing(10),
        row![
            labeled(
                "Course",
                pick_list(app.course_titles(), draft.course.clone(), Message::PaymentCourseSelected)
                    .placeholder("Select a course")
                    .width(Length::Fill),
                form.error("course"),
            )
            .width(Length::Fill),
            input("Amount ($)", PaymentField::Amount, &draft.amount),
        ]
        .spacing(10),
        row![
            labeled(
                "Due Date",
                row![due_picker, text(format_date(draft.due_date))].spacing(10).align_y(Alignment::Center),
                form.error("due_date"),
            )
            .width(Length::Fill),
            labeled(
                "Paid Date",
                row![paid_picker, text(format_date(draft.paid_date))].spacing(10).align_y(Alignment::Center),
                form.error("paid_date"),
            )
            .width(Length::Fill),
        ]
        .spacing(10),
        row![
            labeled(
                "Status",
                pick_list(PaymentStatus::ALL, Some(draft.status), Message::PaymentStatusSelected).width(Length::Fill),
                None,
            )
            .width(Length::Fill),
            labeled(
                method_label,
                pick_list(PaymentMethod::ALL, draft.payment_method, Message::PaymentMethodSelected)
                    .placeholder("Select method")
                    .width(Length::Fill),
                form.error("payment_method"),
            )
            .width(Length::Fill),
        ]
        .spacing(10),
        input("Transaction ID (optional)", PaymentField::TransactionId, &draft.transaction_id),
        horizontal_rule(1),
        row![
            horizontal_space(),
            button("Cancel").style(button::secondary).on_press(Message::CloseForm),
            button(submit_label).on_press_maybe((!form.is_submitting()).then_some(Message::SubmitPaymentForm)),
        ]
        .spacing(10),
    ]
    .spacing(12)
    .into()
}

pub fn payments_screen(app: &App) -> Container<Message> {
    let summary = PaymentSummary::of(app.payments.records());
    let shown = visible(app.payments.records(), &app.payment_query, &app.payment_filter);

    let stats = row![
        stat_card(app, "sack-dollar", "Total Revenue", format_currency(summary.total_revenue)),
        stat_card(app, "hourglass-half", "Pending Amount", format_currency(summary.pending_amount)),
        stat_card(app, "circle-check", "Paid Payments", summary.paid_count.to_string()),
        stat_card(app, "triangle-exclamation", "Overdue", summary.overdue_count.to_string()),
    ]
    .spacing(15);

    let toolbar = row![
        text_input("Search by student name, email or course...", &app.payment_query)
            .on_input(Message::PaymentSearchChanged)
            .padding(10)
            .width(Length::Fill),
        pick_list(
            Choice::options(PaymentStatus::ALL),
            Some(app.payment_filter.status),
            Message::PaymentStatusFilterChanged,
        ),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    let mut list = Column::new().spacing(8).push(header_row());
    if shown.is_empty() {
        list = list.push(text("No payment records found.").size(16));
    }
    for payment in shown.iter().copied() {
        list = list.push(payment_row(app, payment));
    }

    let base_ui = column![
        page_header(
            "Payment Management",
            "Track student payments, dues, and payment history",
            Some(icon_button(app, "plus", "Add Payment").on_press(Message::OpenPaymentForm(None)).into()),
        ),
        stats,
        toolbar,
        Scrollable::new(list).height(Length::Fill),
    ]
    .spacing(15)
    .padding(20);

    let page: Element<Message> = match &app.form {
        Some(ActiveForm::Payment(form)) => modal(app, base_ui, payment_form(app, form), 720.0),
        _ => base_ui.into(),
    };

    Container::new(page)
        .width(Length::Fill)
        .height(Length::Fill)
}
