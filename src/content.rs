//! The weekly spiritual homework worksheet.
//!
//! Everything in here is literal content: the order of the calls is the
//! order of the blocks in the produced document.

use crate::builder::DocumentBuilder;
use crate::model::{Document, Metadata, Paragraph, StyleDefaults, TextRun};

/// File name the worksheet is saved under ("Weekly Spiritual Homework").
pub const OUTPUT_FILE_NAME: &str = "الواجب_الروحي_الأسبوعي.docx";

/// Document title, also used as the core-properties title.
pub const TITLE: &str = "📖 الواجب الروحي الأسبوعي";

/// Build the worksheet with the default style (Arial, 12pt).
pub fn weekly_homework() -> Document {
    weekly_homework_with(StyleDefaults::default())
}

/// Build the worksheet with the given style defaults.
pub fn weekly_homework_with(defaults: StyleDefaults) -> Document {
    let metadata = Metadata {
        title: Some(TITLE.to_string()),
        subject: Some("تأملات روحية من رسالة تيموثاوس الأولى - الإصحاح الخامس".to_string()),
        ..Default::default()
    };

    let builder = DocumentBuilder::new(defaults)
        .with_metadata(metadata)
        .centered_heading(0, TITLE)
        .centered_heading(
            1,
            "✝️ تأملات روحية من رسالة تيموثاوس الأولى - الإصحاح الخامس",
        )
        .rule();

    let builder = reading_list(builder).rule();
    let builder = letter_reflections(builder).rule();
    let builder = book_reflections(builder).rule();
    let builder = practical_application(builder).rule();
    let builder = closing_prayer(builder).rule();

    builder
        .text("📅 تاريخ الإنجاز: ___________")
        .text("✍️ التوقيع: ___________")
        .rule()
        .paragraph(
            Paragraph::new(vec![
                TextRun::italic(
                    "\"لأن ابن الإنسان لم يأتِ ليُخدم بل ليخدم وليبذل نفسه فدية عن كثيرين\"",
                ),
                TextRun::new("\n(مرقس 10: 45)"),
            ])
            .centered(),
        )
        .build()
}

fn reading_list(builder: DocumentBuilder) -> DocumentBuilder {
    builder
        .heading(2, "🎯 القراءة المطلوبة:")
        .paragraph(Paragraph::new(vec![
            TextRun::bold("• "),
            TextRun::bold("رسالة تيموثاوس الأولى - الإصحاح 5"),
            TextRun::bold("\n• "),
            TextRun::bold("كتاب \"الرب يسوع خادم النفوس\" - الباب الأول (ص 13-28)"),
        ]))
}

fn letter_reflections(builder: DocumentBuilder) -> DocumentBuilder {
    builder
        .heading(2, "📝 تأملاتي من رسالة تيموثاوس الأولى - الإصحاح 5:")
        .heading(3, "💭 الآيات المؤثرة:")
        .paragraph(Paragraph::new(vec![
            TextRun::italic(
                "\"لا توبخ شيخاً، بل عظه كأب، والشبان كإخوة، والعجائز كأمهات، والفتيات كأخوات بكل طهارة\"",
            ),
            TextRun::new("\n(تيموثاوس الأولى 5: 1-2)"),
        ]))
        .heading(3, "🌟 التأملات الروحية:")
        .heading(4, "1. احترام الكبار والشيوخ:")
        .paragraph(Paragraph::bullets(&[
            "• الوصية واضحة: لا نوبخ الشيوخ، بل نعظهم كآباء",
            "• هذا يعلمنا الاحترام والتقدير للكبار في السن",
            "• حتى لو كانوا مخطئين، نتعامل معهم بحكمة ومحبة",
        ]))
        .heading(4, "2. العلاقات العائلية الروحية:")
        .paragraph(Paragraph::bullets(&[
            "• نتعامل مع الشبان كإخوة - علاقة مساواة ومحبة",
            "• العجائز كأمهات - رعاية وحنان",
            "• الفتيات كأخوات بكل طهارة - حماية وطهارة",
        ]))
        .heading(4, "3. رعاية الأرامل:")
        .paragraph(Paragraph::bullets(&[
            "• اهتمام خاص بالأرامل الحقيقيات",
            "• مساعدتهم مادياً وروحياً",
            "• عدم إهمال من هم في حاجة",
        ]))
}

fn book_reflections(builder: DocumentBuilder) -> DocumentBuilder {
    builder
        .heading(
            2,
            "📚 تأملاتي من كتاب \"الرب يسوع خادم النفوس\" - الباب الأول:",
        )
        .heading(3, "🎯 الأفكار الروحية المستفادة:")
        .heading(4, "1. يسوع الخادم الحقيقي:")
        .paragraph(Paragraph::bullets(&[
            "• المسيح لم يأتِ ليُخدم بل ليخدم",
            "• خدمة الآخرين هي طريق القداسة",
            "• كل عمل صغير نعمله للآخرين هو خدمة للمسيح",
        ]))
        .heading(4, "2. محبة الآخرين:")
        .paragraph(Paragraph::bullets(&[
            "• المحبة الحقيقية تظهر في الأفعال وليس الكلام فقط",
            "• خدمة الآخرين بدون انتظار مقابل",
            "• وضع احتياجات الآخرين قبل احتياجاتنا",
        ]))
        .heading(4, "3. التواضع في الخدمة:")
        .paragraph(Paragraph::bullets(&[
            "• الخدمة الحقيقية تحتاج تواضع",
            "• عدم التباهي بما نعمله للآخرين",
            "• خدمة في الخفاء كما في العلن",
        ]))
}

fn practical_application(builder: DocumentBuilder) -> DocumentBuilder {
    builder
        .heading(2, "🎯 التطبيق العملي - ما سأجاهد في تنفيذه:")
        .heading(3, "✅ هذا الأسبوع سأعمل على:")
        .heading(4, "1. احترام الكبار:")
        .paragraph(Paragraph::bullets(&[
            "• سأتحدث مع الشيوخ باحترام وتقدير",
            "• سأستمع لنصائحهم بحب",
            "• سأساعدهم في احتياجاتهم",
        ]))
        .heading(4, "2. خدمة الآخرين:")
        .paragraph(Paragraph::bullets(&[
            "• سأساعد شخص واحد على الأقل يومياً",
            "• سأخدم في الكنيسة بفرح",
            "• سأضع احتياجات الآخرين قبل راحتي",
        ]))
        .heading(4, "3. التواضع:")
        .paragraph(Paragraph::bullets(&[
            "• سأخدم في الخفاء بدون تباهي",
            "• سأشكر الله على كل فرصة للخدمة",
            "• سأطلب من الله أن يعطيني قلب خادم",
        ]))
}

fn closing_prayer(builder: DocumentBuilder) -> DocumentBuilder {
    builder.heading(2, "🙏 صلاة الختام:").paragraph(
        Paragraph::new(vec![TextRun::italic(
            "\"يا رب يسوع، أعطني قلب خادم مثلك. علمني أن أحترم الكبار وأخدم الجميع بمحبة وتواضع. ساعدني أن أطبق كلمتك في حياتي اليومية. آمين.\"",
        )])
        .centered(),
    )
}
